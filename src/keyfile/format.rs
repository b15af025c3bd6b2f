//! Whole-key-file serialization and parsing for Scheme A (N lines) and
//! Scheme B (`2N + 1` lines), per §6.4.

use crate::keyfile::parse::parse_frame_order;
use crate::keyfile::types::{CosKey, FrameOrder, FyKey, KeyFileError};

/// Serialize Scheme-A `FYKey` records, one per line, newline-terminated.
pub fn format_scheme_a(keys: &[FyKey]) -> String {
    let mut out = String::new();
    for key in keys {
        out.push_str(key.as_str());
        out.push('\n');
    }
    out
}

/// Parse a Scheme-A key file: every line must be a valid `FYKey`.
pub fn parse_scheme_a(content: &str) -> Result<Vec<FyKey>, KeyFileError> {
    content
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| FyKey::new(line.to_string()))
        .collect()
}

/// Serialize Scheme-B records: `2N` alternating seed lines, then the
/// `FrameOrder` literal as the final line.
pub fn format_scheme_b(keys: &[CosKey], order: &FrameOrder) -> String {
    let mut out = String::new();
    for key in keys {
        out.push_str(&format_f64(key.perm_seed));
        out.push('\n');
        out.push_str(&format_f64(key.diff_seed));
        out.push('\n');
    }
    out.push_str(&order.to_literal());
    out.push('\n');
    out
}

/// Parse a Scheme-B key file: `2N` decimal seed lines followed by the
/// `FrameOrder` literal.
pub fn parse_scheme_b(content: &str) -> Result<(Vec<CosKey>, FrameOrder), KeyFileError> {
    let lines: Vec<&str> = content.lines().filter(|line| !line.is_empty()).collect();
    if lines.is_empty() || lines.len() % 2 == 0 {
        return Err(KeyFileError::WrongLineCount { expected: lines.len() + 1, actual: lines.len() });
    }

    let (seed_lines, order_line) = lines.split_at(lines.len() - 1);
    let order_line = order_line[0];

    let mut keys = Vec::with_capacity(seed_lines.len() / 2);
    for pair in seed_lines.chunks(2) {
        let perm_seed = parse_seed(pair[0])?;
        let diff_seed = parse_seed(pair[1])?;
        keys.push(CosKey { perm_seed, diff_seed });
    }

    let order = parse_frame_order(order_line)?;
    Ok((keys, order))
}

fn parse_seed(line: &str) -> Result<f64, KeyFileError> {
    line.trim().parse::<f64>().map_err(|_| KeyFileError::InvalidSeedLine(line.to_string()))
}

fn format_f64(value: f64) -> String {
    // The reference writes Python's default `repr(float)` text; Rust's
    // `{}` formatter produces the same round-trippable shortest decimal
    // form (both sides just need `str -> f64 -> str` stability, not
    // byte-identical output to the original Python writer).
    format!("{}", value)
}
