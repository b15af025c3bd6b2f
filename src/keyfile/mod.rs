//! keyfile — on-disk representation of per-frame cipher material (§6.4):
//! record types, the strict `FrameOrder` parser, and whole-file
//! format/parse for both schemes.

pub mod format;
pub mod parse;
pub mod types;

pub use format::{format_scheme_a, format_scheme_b, parse_scheme_a, parse_scheme_b};
pub use parse::parse_frame_order;
pub use types::{CosKey, FrameOrder, FyKey, KeyFileError};
