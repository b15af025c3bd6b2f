//! Scheme classification for decrypted key content (§4.4, §6.6).
//!
//! The reference implementation distinguishes Scheme A from Scheme B key
//! files by attempting to parse the first line as a float: Scheme B's
//! seed lines are decimal literals (`"0.1234"` or `"123.0"`), Scheme A's
//! are 128-char hex digests, which never parse as a bare float literal.

use crate::envelope::types::{EnvelopeError, Scheme};

/// Inspect `sample_line` (the first line of decrypted key content) and
/// classify it as Scheme A or Scheme B.
pub fn classify(sample_line: &str) -> Result<Scheme, EnvelopeError> {
    let line = sample_line.trim();
    if line.is_empty() {
        return Err(EnvelopeError::EmptyKeyContent);
    }
    if line.parse::<f64>().is_ok() {
        Ok(Scheme::B)
    } else {
        Ok(Scheme::A)
    }
}

/// Classify `sample_line` and reject if it does not match `expected`.
pub fn gate(sample_line: &str, expected: Scheme) -> Result<(), EnvelopeError> {
    let found = classify(sample_line)?;
    if found == expected {
        Ok(())
    } else {
        Err(EnvelopeError::SchemeMismatch { expected, found })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_digest_line_classifies_as_scheme_a() {
        let hex_line = "a".repeat(128);
        assert_eq!(classify(&hex_line).unwrap(), Scheme::A);
    }

    #[test]
    fn decimal_literal_line_classifies_as_scheme_b() {
        assert_eq!(classify("0.48219").unwrap(), Scheme::B);
        assert_eq!(classify("123.0").unwrap(), Scheme::B);
    }

    #[test]
    fn gate_rejects_mismatched_scheme() {
        let hex_line = "f".repeat(128);
        let result = gate(&hex_line, Scheme::B);
        assert!(matches!(
            result,
            Err(EnvelopeError::SchemeMismatch { expected: Scheme::B, found: Scheme::A })
        ));
    }

    #[test]
    fn gate_accepts_matching_scheme() {
        assert!(gate("0.1", Scheme::B).is_ok());
        let hex_line = "0".repeat(128);
        assert!(gate(&hex_line, Scheme::A).is_ok());
    }

    #[test]
    fn empty_line_is_rejected() {
        assert!(matches!(classify(""), Err(EnvelopeError::EmptyKeyContent)));
    }
}
