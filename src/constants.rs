//! Fixed constants shared across the crate, mirrored from the specification.

/// PBKDF2-HMAC-SHA256 iteration count for the key-file envelope (O3).
///
/// This is weak by modern standards; it is kept so that sealed files
/// produced under this default remain openable. See [`crate::envelope::EnvelopeConfig`]
/// for a configurable, stronger alternative for newly sealed files.
pub const PBKDF2_ITERATIONS: u32 = 100;

/// AES-128-GCM key size in bytes.
pub const ALGORITHM_KEY_SIZE: usize = 16;

/// AES-GCM nonce size in bytes.
pub const ALGORITHM_NONCE_SIZE: usize = 12;

/// AES-GCM authentication tag size in bytes.
pub const ALGORITHM_TAG_SIZE: usize = 16;

/// PBKDF2 salt size in bytes.
pub const PBKDF2_SALT_SIZE: usize = 16;

/// Scheme A: length of a SHA-512 hex digest string.
pub const FYKEY_HEX_LEN: usize = 128;

/// Scheme A: number of logistic-map warm-up samples discarded before the
/// diffusion keystream is drawn.
pub const LOGISTIC_WARMUP: usize = 2000;

/// Scheme B: chaotic-regime control constants (fixed, not configurable).
pub mod ilm {
    pub const N: f64 = 2.24;
    pub const OMEGA: f64 = 34.2;
    pub const THETA: f64 = 38.23;
    pub const KAPPA: f64 = 36.79;
}

/// Scheme B: number of uniform draws used to build one seed (`L` in §4.3).
pub const SEED_DRAW_COUNT: usize = 360;

/// Scheme B: divisor applied to the folded seed accumulator (`2^12`).
pub const SEED_DIVISOR: f64 = 4096.0;

/// Scheme B: diffusion modulus multiplier (`2^32`), applied to the `A`
/// sequence term before reducing modulo 256.
pub const DIFFUSION_SCALE: f64 = 4_294_967_296.0;

/// Scheme B: modulus for 8-bit pixel diffusion.
pub const DIFFUSION_MODULUS: i64 = 256;
