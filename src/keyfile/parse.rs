//! Strict parser for the `FrameOrder` literal line (§6.4, Design Notes
//! re: replacing the reference's `eval()`-based literal parser with a
//! parser that only ever accepts a bracketed, comma-separated list of
//! non-negative integers — anything else is rejected outright, with no
//! code execution surface).

use crate::keyfile::types::{FrameOrder, KeyFileError};

/// Parse `"[3, 0, 2, 1]"` into a validated [`FrameOrder`]. Whitespace
/// around brackets, commas, and digits is tolerated; anything else in the
/// grammar is a hard parse error.
pub fn parse_frame_order(line: &str) -> Result<FrameOrder, KeyFileError> {
    let trimmed = line.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| KeyFileError::MalformedFrameOrder(line.to_string()))?;

    let inner = inner.trim();
    if inner.is_empty() {
        return FrameOrder::new(Vec::new());
    }

    let mut values = Vec::new();
    for token in inner.split(',') {
        let token = token.trim();
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(KeyFileError::MalformedFrameOrder(line.to_string()));
        }
        let value: u32 = token
            .parse()
            .map_err(|_| KeyFileError::MalformedFrameOrder(line.to_string()))?;
        values.push(value);
    }

    FrameOrder::new(values)
}
