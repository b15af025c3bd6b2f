//! AES-128-GCM interface for the key-file envelope (§4.4).
//!
//! Design notes (grounded on the teacher's `crypto/aead.rs::AeadImpl`,
//! narrowed to the one cipher the spec names — no ChaCha20-Poly1305
//! branch, this crate is AES-only per §4.4):
//! - 16-byte key, 12-byte nonce, 16-byte tag.
//! - Tag verification is constant-time (provided by `aes-gcm`) and fails
//!   closed: `open` never returns partial plaintext on tag mismatch.
//! - The envelope has no AAD: the spec's sealed format is
//!   `salt‖nonce‖ciphertext‖tag` with no bound context beyond the key
//!   itself, so `seal`/`open` take plaintext/ciphertext only.

use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes128Gcm, Nonce};

use crate::constants::{ALGORITHM_KEY_SIZE, ALGORITHM_NONCE_SIZE};
use crate::crypto::types::CryptoError;

/// AES-128-GCM cipher bound to one derived envelope key.
pub struct AeadCipher {
    cipher: Aes128Gcm,
}

impl AeadCipher {
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        if key.len() != ALGORITHM_KEY_SIZE {
            return Err(CryptoError::InvalidKeyLen {
                expected: ALGORITHM_KEY_SIZE,
                actual: key.len(),
            });
        }
        let cipher = Aes128Gcm::new_from_slice(key).map_err(|_| CryptoError::InvalidKeyLen {
            expected: ALGORITHM_KEY_SIZE,
            actual: key.len(),
        })?;
        Ok(Self { cipher })
    }

    /// Seal `plaintext` under `nonce`. Returns `ciphertext || tag`.
    pub fn seal(&self, nonce: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if nonce.len() != ALGORITHM_NONCE_SIZE {
            return Err(CryptoError::InvalidNonceLen {
                expected: ALGORITHM_NONCE_SIZE,
                actual: nonce.len(),
            });
        }
        self.cipher
            .encrypt(Nonce::from_slice(nonce), Payload { msg: plaintext, aad: &[] })
            .map_err(|_| CryptoError::Failure("AES-GCM seal failed".into()))
    }

    /// Open `ciphertext_and_tag` under `nonce`. Fails closed with
    /// [`CryptoError::TagMismatch`] on any authentication failure.
    pub fn open(&self, nonce: &[u8], ciphertext_and_tag: &[u8]) -> Result<Vec<u8>, CryptoError> {
        if nonce.len() != ALGORITHM_NONCE_SIZE {
            return Err(CryptoError::InvalidNonceLen {
                expected: ALGORITHM_NONCE_SIZE,
                actual: nonce.len(),
            });
        }
        self.cipher
            .decrypt(Nonce::from_slice(nonce), Payload { msg: ciphertext_and_tag, aad: &[] })
            .map_err(|_| CryptoError::TagMismatch)
    }
}
