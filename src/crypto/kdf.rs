//! PBKDF2-HMAC-SHA256 key derivation for the key-file envelope (§4.4).
//!
//! Design (grounded on the teacher's `crypto/kdf.rs` shape — a pure
//! function from secret material + salt to a fixed-size key):
//! - HKDF is wrong here: the spec's envelope needs an iteration count
//!   (O3), which HKDF's Extract/Expand schedule has no notion of. PBKDF2
//!   is the primitive the spec actually names.
//! - `salt` must be random per seal (caller-supplied, §3: 16 random bytes).

use hmac::Hmac;
use pbkdf2::pbkdf2;
use sha2::Sha256;

use crate::constants::ALGORITHM_KEY_SIZE;

/// Derive a 128-bit AES-GCM key from `password` and `salt` using
/// PBKDF2-HMAC-SHA256 with `iterations` rounds.
pub fn derive_envelope_key(password: &[u8], salt: &[u8], iterations: u32) -> [u8; ALGORITHM_KEY_SIZE] {
    let mut key = [0u8; ALGORITHM_KEY_SIZE];
    pbkdf2::<Hmac<Sha256>>(password, salt, iterations, &mut key)
        .expect("HMAC output length is always valid for a 16-byte PBKDF2 key");
    key
}
