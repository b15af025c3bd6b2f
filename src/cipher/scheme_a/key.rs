//! Scheme-A key derivation: `SHA-512(frame) → four quarters → (r, x0)`
//! control-parameter pairs (§4.2).

use crate::crypto::sha512_hex;

/// The four logistic-map control parameters derived from one frame's
/// `FYKey`. `r_perm`/`x0_perm` seed the row/column Fisher-Yates shuffle;
/// `r_diff`/`x0_diff` seed the diffusion keystream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchemeAKey {
    pub r_perm: f64,
    pub x0_perm: f64,
    pub r_diff: f64,
    pub x0_diff: f64,
}

/// Split a 128-char hex digest into its four 32-char quarters and read
/// each as a big-endian unsigned 128-bit integer.
fn quarter_values(hash_hex: &str) -> [u128; 4] {
    let bytes = hash_hex.as_bytes();
    let mut out = [0u128; 4];
    for (i, chunk) in bytes.chunks(32).enumerate() {
        let quarter = std::str::from_utf8(chunk).expect("hex digest is ASCII");
        out[i] = u128::from_str_radix(quarter, 16).expect("FYKey quarter is valid hex");
    }
    out
}

/// Map a big integer `d` onto the fractional double `0.<digits of d>`,
/// i.e. treat `d`'s decimal digit string as the digits after a decimal
/// point (§4.2).
fn fractional_from_digits(d: u128) -> f64 {
    format!("0.{}", d).parse::<f64>().expect("digit string is always a valid float literal")
}

/// Derive the control-parameter quadruple from the hash of one plaintext
/// frame's raw bytes. `hash_hex` is the `FYKey` — callers that already
/// have it (it is also stored per-frame in the key file) should pass it
/// straight through rather than re-hashing.
pub fn derive_key(hash_hex: &str) -> SchemeAKey {
    let quarters = quarter_values(hash_hex);
    let fractions: Vec<f64> = quarters.iter().map(|&d| fractional_from_digits(d)).collect();

    SchemeAKey {
        r_perm: fractions[0] * 0.43 + 3.57,
        x0_perm: fractions[1],
        r_diff: fractions[2] * 0.43 + 3.57,
        x0_diff: fractions[3],
    }
}

/// Convenience wrapper: hash `frame_bytes` and derive the key in one call.
pub fn derive_key_from_frame_bytes(frame_bytes: &[u8]) -> (String, SchemeAKey) {
    let hash_hex = sha512_hex(frame_bytes);
    let key = derive_key(&hash_hex);
    (hash_hex, key)
}
