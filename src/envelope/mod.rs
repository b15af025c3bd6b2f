//! envelope — the key-file AEAD wrapper (C4): seal/open of the plaintext
//! key file under a password-derived AES-128-GCM key, plus the
//! scheme-compatibility gate used before driving C2/C3 decryption.

pub mod gate;
pub mod seal;
pub mod types;

pub use gate::{classify, gate as check_scheme};
pub use seal::{open, seal as seal_key_file};
pub use types::{EnvelopeConfig, EnvelopeError, Scheme};
