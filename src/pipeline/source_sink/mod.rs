//! source_sink — C1: decode input video to BGR rasters, encode output
//! frames with a specified codec (§4.1, §6.1-6.3). The trait split lets
//! the pipeline drive either a real decoder/encoder or, in tests, a
//! deterministic in-memory fixture — grounded on the teacher's
//! `stream_v2::io` canonical-source/sink abstraction, narrowed from
//! byte readers/writers to frame readers/writers.

pub mod memory;
#[cfg(feature = "video-io")]
pub mod video;

pub use memory::{MemoryFrameSink, MemoryFrameSource};
#[cfg(feature = "video-io")]
pub use video::{VideoFileSink, VideoFileSource};

use std::fmt;

use crate::cipher::Frame;

#[derive(Debug)]
pub enum SourceSinkError {
    Io(std::io::Error),
    Decode(String),
    Encode(String),
    DimensionMismatch { expected: (usize, usize), actual: (usize, usize) },
}

impl fmt::Display for SourceSinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SourceSinkError::*;
        match self {
            Io(e) => write!(f, "I/O error: {}", e),
            Decode(msg) => write!(f, "frame decode error: {}", msg),
            Encode(msg) => write!(f, "frame encode error: {}", msg),
            DimensionMismatch { expected, actual } => write!(
                f,
                "frame dimension mismatch: sink declared {:?}, frame was {:?}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for SourceSinkError {}

impl From<std::io::Error> for SourceSinkError {
    fn from(e: std::io::Error) -> Self {
        SourceSinkError::Io(e)
    }
}

/// The lossless codec the ciphered output container must use (§6.2).
/// Any transcoding to a lossy codec after encryption invalidates
/// decryption; the sink's declared codec exists to make that contract
/// explicit rather than implicit in a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputCodec {
    /// `HFYU` — lossless Huffman-YUV, required for encrypted output.
    HuffYuv,
    /// `mp4v` — the reference default for decrypted output; lossy is
    /// acceptable here because there is no further decryption step.
    Mp4v,
}

impl OutputCodec {
    pub fn fourcc(self) -> [char; 4] {
        match self {
            OutputCodec::HuffYuv => ['H', 'F', 'Y', 'U'],
            OutputCodec::Mp4v => ['m', 'p', '4', 'v'],
        }
    }
}

/// Metadata the sink commits to at open time (§4.1): frame rate and the
/// dimensions the sink will accept for every subsequent frame.
#[derive(Debug, Clone, Copy)]
pub struct SinkConfig {
    pub height: usize,
    pub width: usize,
    pub frame_rate: f64,
    pub codec: OutputCodec,
}

/// Decodes a video into a sequence of `(plaintext frame index, BGR raster)`
/// pairs, in order.
pub trait FrameSource {
    fn height(&self) -> usize;
    fn width(&self) -> usize;
    fn frame_rate(&self) -> f64;
    fn frame_count(&self) -> Option<u64>;

    /// Decode and return the next frame, or `Ok(None)` at end of stream.
    fn next_frame(&mut self) -> Result<Option<Frame>, SourceSinkError>;
}

/// Encodes a sequence of BGR rasters into an output video container
/// under the codec and dimensions declared at open (§4.1).
pub trait FrameSink {
    fn write_frame(&mut self, frame: &Frame) -> Result<(), SourceSinkError>;

    /// Finalise and close the output container. Must be called before
    /// the key-file envelope is sealed (§5 ordering guarantees).
    fn finalize(&mut self) -> Result<(), SourceSinkError>;
}
