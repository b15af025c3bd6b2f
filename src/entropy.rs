//! Injectable entropy capability for Scheme B's nondeterministic seed draw.
//!
//! Design Notes (O4): the reference implementation reads from a process-wide,
//! non-cryptographic PRNG. That is re-architected here as a small capability
//! trait so production code can use a CSPRNG and tests can drive Scheme B
//! deterministically without touching global state.

use rand::rngs::OsRng;
use rand::RngCore;

/// A source of independent uniform doubles in `[0, 1)`.
///
/// Implementors must not share mutable state across threads implicitly;
/// each [`crate::cipher::scheme_b`] invocation owns its source for the
/// duration of one frame's seed draw.
pub trait EntropySource {
    /// Draw `count` independent uniform samples in `[0, 1)`.
    fn sample_uniform(&mut self, count: usize) -> Vec<f64>;
}

/// Draws from the operating system's cryptographically secure RNG.
///
/// This is the production default (O4): it changes no on-disk format,
/// it only replaces the reference's non-cryptographic seed source.
#[derive(Debug, Default)]
pub struct CsprngEntropySource;

impl EntropySource for CsprngEntropySource {
    fn sample_uniform(&mut self, count: usize) -> Vec<f64> {
        let mut rng = OsRng;
        (0..count)
            .map(|_| {
                // 53 bits of mantissa precision, mapped into [0, 1).
                let bits = rng.next_u64() >> 11;
                (bits as f64) / ((1u64 << 53) as f64)
            })
            .collect()
    }
}

/// A fixed, repeatable sequence for tests (testable property 8's
/// counterpart: driving Scheme B deterministically to assert the
/// permutation/diffusion math, independent of the entropy source).
#[derive(Debug, Clone)]
pub struct FixedEntropySource {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedEntropySource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }

    /// A source that cycles a single constant value forever.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl EntropySource for FixedEntropySource {
    fn sample_uniform(&mut self, count: usize) -> Vec<f64> {
        (0..count)
            .map(|_| {
                let v = self.values[self.cursor % self.values.len()];
                self.cursor += 1;
                v
            })
            .collect()
    }
}
