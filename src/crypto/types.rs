//! Shared crypto error type. Grounded on the teacher's `crypto/types.rs::CryptoError`.

use std::fmt;

#[derive(Debug)]
pub enum CryptoError {
    /// Invalid key length provided to the AEAD cipher.
    InvalidKeyLen { expected: usize, actual: usize },

    /// Nonce length mismatch (must be 12 bytes for AES-GCM).
    InvalidNonceLen { expected: usize, actual: usize },

    /// AEAD tag mismatch (authentication failure) — surfaces as
    /// `WrongPasswordOrTampered` at the envelope layer.
    TagMismatch,

    /// General derivation or runtime failure with context.
    Failure(String),
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CryptoError::*;
        match self {
            InvalidKeyLen { expected, actual } => {
                write!(f, "invalid key length: expected={}, actual={}", expected, actual)
            }
            InvalidNonceLen { expected, actual } => {
                write!(f, "invalid nonce length: expected={}, actual={}", expected, actual)
            }
            TagMismatch => write!(f, "AEAD tag mismatch"),
            Failure(msg) => write!(f, "crypto failure: {}", msg),
        }
    }
}

impl std::error::Error for CryptoError {}
