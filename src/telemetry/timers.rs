//! Stage timers for the frame cipher pipeline.
//!
//! Summary: records durations for hashing, permutation, diffusion, frame
//! I/O, and envelope sealing. Grounded on the teacher's
//! `telemetry/timers.rs` (`Stage` + `StageTimes`), with this crate's own
//! stage set in place of the teacher's compression/encode-decode stages.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    FrameRead,
    FrameWrite,
    Hash,
    Permute,
    Diffuse,
    Seal,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::FrameRead => "frame_read",
            Stage::FrameWrite => "frame_write",
            Stage::Hash => "hash",
            Stage::Permute => "permute",
            Stage::Diffuse => "diffuse",
            Stage::Seal => "seal",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StageTimes {
    times: HashMap<Stage, Duration>,
}

impl StageTimes {
    /// Add duration to a stage (accumulates if already present).
    pub fn add(&mut self, stage: Stage, dur: Duration) {
        *self.times.entry(stage).or_insert(Duration::ZERO) += dur;
    }

    pub fn get(&self, stage: Stage) -> Duration {
        self.times.get(&stage).copied().unwrap_or(Duration::ZERO)
    }

    pub fn get_ms(&self, stage: Stage) -> f64 {
        self.get(stage).as_secs_f64() * 1_000.0
    }

    pub fn total(&self) -> Duration {
        self.times.values().copied().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Stage, &Duration)> {
        self.times.iter()
    }
}

/// Wall-clock duration for one processed frame (§4.5: "Record per-frame
/// wall-clock duration into a side-channel list").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameTiming {
    pub frame_index: u64,
    pub duration: Duration,
    pub stages: StageTimes,
}

/// Immutable snapshot of a pipeline run's timing, suitable for optional
/// emission to an external timing log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub per_frame: Vec<FrameTiming>,
}

impl TelemetrySnapshot {
    pub fn record(&mut self, frame_index: u64, duration: Duration, stages: StageTimes) {
        self.per_frame.push(FrameTiming {
            frame_index,
            duration,
            stages,
        });
    }

    pub fn total_duration(&self) -> Duration {
        self.per_frame.iter().map(|f| f.duration).sum()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
