//! Block-level permutation for Scheme B (§4.3 "Permutation (block-level)").
//!
//! The walk itself is bounded to the `block_size² = M` top-left sub-square
//! of each plane, but a swap target occasionally lands outside it: the
//! oracle indexes the *full* plane array with a computed offset that can
//! go slightly negative, and numpy wraps that the way it wraps any
//! negative index, against the array's own dimension. This module
//! reproduces that wraparound rather than confining targets to `[0, M)`.
//! The inverse re-applies the identical swap sequence in reverse order,
//! the same technique Scheme A's Fisher-Yates inverse uses.

use crate::cipher::frame::Frame;
use crate::cipher::scheme_b::ilm::ilm_cosine_sequence;

/// Python-style negative array indexing: `idx == -1` means the last
/// element of an array of length `len`. Used both for the `mod (M+1)`
/// table lookups (§4.3, Design Notes O2) and for wrapping a swap target
/// computed against the full plane dimensions.
fn wrap_index(len: usize, idx: i64) -> usize {
    if idx < 0 {
        (len as i64 + idx) as usize
    } else {
        idx as usize
    }
}

fn argsort(values: &[f64]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..values.len()).collect();
    idx.sort_by(|&a, &b| values[a].partial_cmp(&values[b]).expect("ILM sequence has no NaNs"));
    idx
}

/// Precomputed block-swap geometry for one frame, derived once from
/// `perm_seed` and reused for every `(x, y)` step of the walk.
pub struct BlockPermutation {
    block_size: usize,
    m: usize,
    height: usize,
    width: usize,
    mat_l: Vec<Vec<usize>>,
    mat_m: Vec<Vec<usize>>,
}

impl BlockPermutation {
    /// `block_size = floor(sqrt(min(H, W)))`.
    pub fn block_size_for(height: usize, width: usize) -> usize {
        (height.min(width) as f64).sqrt().floor() as usize
    }

    pub fn derive(height: usize, width: usize, perm_seed: f64) -> Self {
        let block_size = Self::block_size_for(height, width);
        let m = block_size * block_size;

        let sequence = ilm_cosine_sequence(4 * m, perm_seed);
        let p = &sequence[0..m];
        let q = &sequence[m..2 * m];
        let r = &sequence[2 * m..3 * m];
        let s_tbl = &sequence[3 * m..4 * m];

        let in_p = argsort(p);
        let in_q = argsort(q);
        let in_r = argsort(r);
        let in_s = argsort(s_tbl);

        let modulus = (m + 1) as i64;
        let mut mat_l = vec![vec![0usize; m]; m];
        let mut mat_m = vec![vec![0usize; m]; m];

        for y in 1..=m {
            for x in 1..=m {
                let c = ((x as i64) + (in_q[y - 1] as i64) - 1).rem_euclid(modulus);
                let d = ((x as i64) + (in_s[y - 1] as i64) - 1).rem_euclid(modulus);
                mat_l[x - 1][y - 1] = in_p[wrap_index(m, c - 1)];
                mat_m[x - 1][y - 1] = in_r[wrap_index(m, d - 1)];
            }
        }

        Self { block_size, m, height, width, mat_l, mat_m }
    }

    pub fn m(&self) -> usize {
        self.m
    }

    /// Compute the swap partner `(row, col)` for 1-based walk position
    /// `(x, y)` per §4.3's `i, j, c1, d1, c2, d2` derivation, already
    /// wrapped into valid 0-based plane coordinates.
    fn target_for(&self, x: usize, y: usize) -> (usize, usize) {
        let bs = self.block_size as i64;
        let i = self.mat_l[x - 1][y - 1];
        let row_for_m = wrap_index(self.m, i as i64 - 1);
        let j = self.mat_m[row_for_m][y - 1];

        let c1 = (i as i64 - 1).div_euclid(bs);
        let d1 = (i as i64 - 1).rem_euclid(bs);
        let c2 = (j as i64 - 1).div_euclid(bs) + 1;
        let d2 = (j as i64 - 1).rem_euclid(bs) + 1;

        let row = c1 * bs + c2;
        let col = d1 * bs + d2;

        // The oracle indexes the full-size channel array with these
        // (occasionally negative) offsets directly; reproduce numpy's
        // negative-index wraparound against the plane's own dimensions
        // rather than panicking on an underflowed `usize`.
        (wrap_index(self.height, row - 1), wrap_index(self.width, col - 1))
    }

    fn walk_and_swap(&self, plane: &mut Frame, positions: impl Iterator<Item = (usize, usize)>) {
        for (x, y) in positions {
            let (row, col) = self.target_for(x, y);
            plane.swap_pixels((y - 1, x - 1), (row, col));
        }
    }

    pub fn apply_forward(&self, plane: &mut Frame) {
        let positions: Vec<(usize, usize)> =
            (1..=self.m).flat_map(|y| (1..=self.m).map(move |x| (x, y))).collect();
        self.walk_and_swap(plane, positions.into_iter());
    }

    pub fn apply_inverse(&self, plane: &mut Frame) {
        let positions: Vec<(usize, usize)> =
            (1..=self.m).rev().flat_map(|y| (1..=self.m).rev().map(move |x| (x, y))).collect();
        self.walk_and_swap(plane, positions.into_iter());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequential_frame(h: usize, w: usize) -> Frame {
        let mut data = vec![0u8; h * w * 3];
        for i in 0..h * w {
            data[i * 3] = (i % 256) as u8;
            data[i * 3 + 1] = ((i * 3 + 1) % 256) as u8;
            data[i * 3 + 2] = ((i * 7 + 2) % 256) as u8;
        }
        Frame::new(h, w, data)
    }

    #[test]
    fn forward_then_inverse_round_trips() {
        let original = sequential_frame(10, 12);
        let perm = BlockPermutation::derive(10, 12, 0.4821);

        let mut f = original.clone();
        perm.apply_forward(&mut f);
        assert_ne!(f, original);

        perm.apply_inverse(&mut f);
        assert_eq!(f, original);
    }

    #[test]
    fn block_size_is_floor_sqrt_of_min_dimension() {
        assert_eq!(BlockPermutation::block_size_for(10, 12), 3);
        assert_eq!(BlockPermutation::block_size_for(16, 16), 4);
    }
}
