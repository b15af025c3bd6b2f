//! Top-level pipeline error. Grounded on the teacher's `types.rs::StreamError`:
//! one variant per module feeding into the pipeline, plus a generic
//! validation/I/O catch-all, with `From` impls so `?` composes across
//! every stage.

use std::io;

use crate::envelope::EnvelopeError;
use crate::keyfile::KeyFileError;
use crate::pipeline::source_sink::SourceSinkError;

#[derive(Debug)]
pub enum PipelineError {
    Io(io::Error),
    SourceSink(SourceSinkError),
    KeyFile(KeyFileError),
    Envelope(EnvelopeError),

    /// The pipeline was cancelled between frames or during envelope seal
    /// (§5 "Cancellation").
    Cancelled,

    /// A state-machine transition was attempted out of order (§4.5).
    InvalidTransition { from: &'static str, attempted: &'static str },

    Validation(String),
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use PipelineError::*;
        match self {
            Io(e) => write!(f, "I/O error: {}", e),
            SourceSink(e) => write!(f, "frame source/sink error: {}", e),
            KeyFile(e) => write!(f, "key-file error: {}", e),
            Envelope(e) => write!(f, "envelope error: {}", e),
            Cancelled => write!(f, "pipeline cancelled"),
            InvalidTransition { from, attempted } => {
                write!(f, "invalid state transition: {} -> {}", from, attempted)
            }
            Validation(msg) => write!(f, "validation error: {}", msg),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<io::Error> for PipelineError {
    fn from(e: io::Error) -> Self {
        PipelineError::Io(e)
    }
}

impl From<SourceSinkError> for PipelineError {
    fn from(e: SourceSinkError) -> Self {
        PipelineError::SourceSink(e)
    }
}

impl From<KeyFileError> for PipelineError {
    fn from(e: KeyFileError) -> Self {
        PipelineError::KeyFile(e)
    }
}

impl From<EnvelopeError> for PipelineError {
    fn from(e: EnvelopeError) -> Self {
        PipelineError::Envelope(e)
    }
}
