//! ILM-cosine chaotic sequence generator (§4.3 "ILM-Cosine sequence").
//!
//! Note (i) from the spec: the recurrence's next-iteration seed is the
//! *previous* iteration's total `ILM0+ILM1+ILM2`, not a running update of
//! `S` inside the same step — i.e. a two-slot buffer initialised to the
//! original seed for the first iteration. This must be reproduced
//! exactly; it is not an approximation of a simpler single-variable
//! recurrence.

use crate::constants::ilm::{KAPPA, N, OMEGA, THETA};

/// Generate a length-`length` ILM-cosine sequence seeded by `seed`.
pub fn ilm_cosine_sequence(length: usize, seed: f64) -> Vec<f64> {
    let a1 = N * OMEGA;
    let a2 = N * THETA;
    let b1 = N;
    let b2 = KAPPA;

    // Two-slot buffer: `s` is the seed fed into this step's ILM0..2, while
    // `prev_total` lags one step behind the value actually stored into
    // `s` next. This reproduces the oracle's `S = ILM` (old total) before
    // `ILM` is overwritten with the freshly computed total, which is why
    // every other emitted value repeats its predecessor.
    let mut s = seed;
    let mut prev_total = seed;
    let mut out = Vec::with_capacity(length);
    for _ in 0..length {
        let ilm0 = (a1 * s * (1.0 - s) + s).rem_euclid(1.0);
        let ilm1 = (a2 * s + s / (1.0 + ilm0 * ilm0)).rem_euclid(1.0);
        let ilm2 = (b1 * (ilm0 + ilm1 + b2) * s.sin()).rem_euclid(1.0);
        let total = ilm0 + ilm1 + ilm2;

        out.push((std::f64::consts::PI * total).cos());
        s = prev_total;
        prev_total = total;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_deterministic_given_seed() {
        let a = ilm_cosine_sequence(32, 0.314);
        let b = ilm_cosine_sequence(32, 0.314);
        assert_eq!(a, b);
    }

    #[test]
    fn output_values_are_bounded_cosines() {
        let seq = ilm_cosine_sequence(64, 0.2718);
        assert_eq!(seq.len(), 64);
        assert!(seq.iter().all(|&v| (-1.0..=1.0).contains(&v)));
    }

    #[test]
    fn different_seeds_diverge() {
        let a = ilm_cosine_sequence(16, 0.1);
        let b = ilm_cosine_sequence(16, 0.9);
        assert_ne!(a, b);
    }
}
