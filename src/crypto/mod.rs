//! crypto — primitive building blocks shared by the key envelope (C4) and
//! the per-frame ciphers (C2/C3). Grounded on the teacher's `crypto/` module
//! (`types`, `aead`, `kdf`, `digest`), narrowed to the single cipher/PRF/
//! digest combinations this specification actually names.

pub mod aead;
pub mod digest;
pub mod kdf;
pub mod types;

pub use aead::AeadCipher;
pub use digest::{sha256_digest, sha512_hex};
pub use kdf::derive_envelope_key;
pub use types::CryptoError;
