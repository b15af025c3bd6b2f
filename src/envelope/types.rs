//! Envelope types: scheme discriminant, tunables, and the error taxonomy
//! for C4 (seal/open/gate). Grounded on the teacher's `headers/types.rs`
//! shape — a small typed error enum plus a config struct — narrowed away
//! from the teacher's binary wire header since the envelope here wraps an
//! opaque base64 blob, not a parsed struct.

use std::fmt;

use crate::crypto::CryptoError;

/// Which per-frame cipher a key file was produced by (§4.1, §6.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Fisher-Yates / logistic-map cipher (C2). Key lines are 128-char hex.
    A,
    /// ILM-cosine cipher (C3). Key lines are decimal seed literals plus a
    /// trailing `FrameOrder` list.
    B,
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::A => write!(f, "scheme-a"),
            Scheme::B => write!(f, "scheme-b"),
        }
    }
}

/// Tunables for `seal`/`open`. `iterations` defaults to the spec's
/// documented `PBKDF2_ITERATIONS` (O3: kept for compatibility with
/// previously sealed files); callers that want stronger KDF cost for new
/// key files may raise it.
#[derive(Debug, Clone, Copy)]
pub struct EnvelopeConfig {
    pub iterations: u32,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self { iterations: crate::constants::PBKDF2_ITERATIONS }
    }
}

#[derive(Debug)]
pub enum EnvelopeError {
    /// The file at the given path could not be read or written.
    Io { path: String, source: std::io::Error },

    /// The envelope's base64 framing was malformed (wrong length, not
    /// valid base64, or shorter than salt+nonce+tag).
    MalformedEnvelope(String),

    /// AEAD tag verification failed: wrong password, or the envelope was
    /// tampered with. Kept distinct from `MalformedEnvelope` per §4.4.
    WrongPasswordOrTampered,

    /// `gate` found the key content's apparent scheme did not match the
    /// scheme requested by the caller.
    SchemeMismatch { expected: Scheme, found: Scheme },

    /// The key content had no lines to inspect for `gate`.
    EmptyKeyContent,
}

impl fmt::Display for EnvelopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EnvelopeError::*;
        match self {
            Io { path, source } => write!(f, "I/O error on '{}': {}", path, source),
            MalformedEnvelope(msg) => write!(f, "malformed key-file envelope: {}", msg),
            WrongPasswordOrTampered => {
                write!(f, "wrong password or tampered key-file envelope")
            }
            SchemeMismatch { expected, found } => {
                write!(f, "key does not match algorithm: expected {}, found {}", expected, found)
            }
            EmptyKeyContent => write!(f, "key content has no lines to classify"),
        }
    }
}

impl std::error::Error for EnvelopeError {}

impl From<CryptoError> for EnvelopeError {
    fn from(e: CryptoError) -> Self {
        match e {
            CryptoError::TagMismatch => EnvelopeError::WrongPasswordOrTampered,
            other => EnvelopeError::MalformedEnvelope(other.to_string()),
        }
    }
}
