//! Digest primitives. Grounded on the teacher's `crypto/digest.rs` shape
//! (a small typed wrapper over `sha2`), narrowed to the two concrete
//! algorithms this spec uses: SHA-512 for the Scheme-A `FYKey` (§4.2) and
//! SHA-256 for Scheme-B's per-draw seed folding (§4.3).

use sha2::{Digest, Sha256, Sha512};

/// `H = SHA-512(plaintext_frame_bytes)` as a 128-character lowercase hex
/// string (§3, §4.2). This is the `FYKey`.
pub fn sha512_hex(data: &[u8]) -> String {
    let digest = Sha512::digest(data);
    hex::encode(digest)
}

/// SHA-256 digest of one big-endian-packed `f64` sample, returned as the
/// raw 32 bytes so the caller can parse it as a 256-bit unsigned integer
/// (§4.3 step 2).
pub fn sha256_digest(data: &[u8]) -> [u8; 32] {
    let digest = Sha256::digest(data);
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}
