//! Keystream diffusion for Scheme A (§4.2). XOR against a byte keystream
//! derived from a second logistic-map stream; the operation is its own
//! inverse (XOR is an involution), so the same function drives both
//! directions.

use crate::cipher::frame::Frame;
use crate::cipher::scheme_a::logistic::LogisticMap;
use crate::constants::LOGISTIC_WARMUP;

/// Produce `3·H·W` keystream bytes: iterate the logistic map
/// `2000 + 3·H·W − 1` times past the seed, recording the full trajectory
/// (seed included), then discard the first 2000 samples.
fn keystream(height: usize, width: usize, r: f64, x0: f64) -> Vec<u8> {
    let total = 3 * height * width;
    let mut lm = LogisticMap::new(r, x0);
    let mut samples = Vec::with_capacity(LOGISTIC_WARMUP + total);
    samples.push(x0);
    for _ in 0..(LOGISTIC_WARMUP + total - 1) {
        samples.push(lm.advance());
    }
    samples[LOGISTIC_WARMUP..]
        .iter()
        .map(|&sample| {
            let scaled = (sample * 1e16).floor();
            scaled.rem_euclid(256.0) as u8
        })
        .collect()
}

/// XOR `frame` against the keystream derived from `(r, x0)`. Channel
/// thirds map `(B, G, R)` in that order (§4.2 step 4).
pub fn diffuse(frame: &Frame, r: f64, x0: f64) -> Frame {
    let h = frame.height();
    let w = frame.width();
    let hw = h * w;
    let kv = keystream(h, w, r, x0);

    let (k_b, rest) = kv.split_at(hw);
    let (k_g, k_r) = rest.split_at(hw);

    let mut data = frame.as_bytes().to_vec();
    for i in 0..hw {
        data[i * 3] ^= k_b[i];
        data[i * 3 + 1] ^= k_g[i];
        data[i * 3 + 2] ^= k_r[i];
    }
    Frame::new(h, w, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequential_frame(h: usize, w: usize) -> Frame {
        let mut data = vec![0u8; h * w * 3];
        for i in 0..h * w {
            data[i * 3] = (i % 256) as u8;
            data[i * 3 + 1] = ((i * 5 + 3) % 256) as u8;
            data[i * 3 + 2] = ((i * 11 + 7) % 256) as u8;
        }
        Frame::new(h, w, data)
    }

    #[test]
    fn diffuse_is_an_involution() {
        let original = sequential_frame(4, 6);
        let once = diffuse(&original, 3.88, 0.42);
        assert_ne!(once, original);
        let twice = diffuse(&once, 3.88, 0.42);
        assert_eq!(twice, original);
    }

    #[test]
    fn keystream_length_matches_three_hw() {
        let ks = keystream(4, 5, 3.7, 0.1);
        assert_eq!(ks.len(), 3 * 4 * 5);
    }
}
