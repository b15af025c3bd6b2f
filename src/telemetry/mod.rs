//! telemetry — per-stage and per-frame timing, mirroring the teacher's
//! `telemetry` module (immutable snapshots over streaming pipeline stages).
//!
//! Industry notes:
//! - Stage timers mirror practice in TLS/QUIC libraries and in the teacher's
//!   `crypto-core`: each pipeline stage is timed independently so bottlenecks
//!   (hashing vs. permutation vs. diffusion) are visible without profiling.
//! - Snapshots are immutable and `Serialize`-able for optional emission to an
//!   external timing log (§4.5/§5: "side-channel list for optional emission").

pub mod timers;

pub use timers::{FrameTiming, Stage, StageTimes, TelemetrySnapshot};
