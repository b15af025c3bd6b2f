//! Deterministic in-memory `FrameSource`/`FrameSink` for tests: no
//! decoder/encoder dependency, exact round-trip of whatever frames were
//! fed in.

use crate::cipher::Frame;
use crate::pipeline::source_sink::{FrameSink, FrameSource, SinkConfig, SourceSinkError};

pub struct MemoryFrameSource {
    height: usize,
    width: usize,
    frame_rate: f64,
    frames: std::vec::IntoIter<Frame>,
    total: usize,
}

impl MemoryFrameSource {
    pub fn new(height: usize, width: usize, frame_rate: f64, frames: Vec<Frame>) -> Self {
        let total = frames.len();
        Self { height, width, frame_rate, frames: frames.into_iter(), total }
    }
}

impl FrameSource for MemoryFrameSource {
    fn height(&self) -> usize {
        self.height
    }

    fn width(&self) -> usize {
        self.width
    }

    fn frame_rate(&self) -> f64 {
        self.frame_rate
    }

    fn frame_count(&self) -> Option<u64> {
        Some(self.total as u64)
    }

    fn next_frame(&mut self) -> Result<Option<Frame>, SourceSinkError> {
        Ok(self.frames.next())
    }
}

#[derive(Default)]
pub struct MemoryFrameSink {
    config: Option<SinkConfig>,
    frames: Vec<Frame>,
    finalized: bool,
}

impl MemoryFrameSink {
    pub fn new(config: SinkConfig) -> Self {
        Self { config: Some(config), frames: Vec::new(), finalized: false }
    }

    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
}

impl FrameSink for MemoryFrameSink {
    fn write_frame(&mut self, frame: &Frame) -> Result<(), SourceSinkError> {
        if let Some(config) = &self.config {
            let expected = (config.height, config.width);
            let actual = (frame.height(), frame.width());
            if expected != actual {
                return Err(SourceSinkError::DimensionMismatch { expected, actual });
            }
        }
        self.frames.push(frame.clone());
        Ok(())
    }

    fn finalize(&mut self) -> Result<(), SourceSinkError> {
        self.finalized = true;
        Ok(())
    }
}
