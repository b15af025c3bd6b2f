//! medicipher-core
//!
//! Pure Rust chaotic-map video frame cipher engine.
//! No CLI, no REST/streaming API, no GUI, no FFI.

#![forbid(unsafe_code)]

pub mod constants;
pub mod entropy;
pub mod telemetry;

pub mod crypto;
pub mod envelope;
pub mod keyfile;

pub mod cipher;
pub mod pipeline;

pub mod prelude {
    pub use crate::cipher::frame::Frame;
    pub use crate::cipher::{scheme_a, scheme_b};
    pub use crate::envelope::Scheme;
    pub use crate::pipeline::{PipelineError, VideoPipeline};
}
