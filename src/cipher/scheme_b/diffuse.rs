//! Modular additive diffusion for Scheme B (§4.3 "Diffusion").
//!
//! Forward diffusion is a sequential raster-order recurrence: every
//! position's diffused value folds in the *previous* diffused value,
//! except the very first position, which folds in the corresponding
//! value from the (fully known) input plane instead.
//!
//! Design Notes O1: the reference's inverse recurrence has a genuine
//! inconsistency in how it treats the first position (it patches it in
//! a separate second loop that doesn't actually undo the forward
//! recurrence algebraically). This implementation derives the inverse
//! from the forward recurrence directly: every non-first position's
//! forward equation only ever references the *ciphertext* plane (`D`)
//! for its "previous" term, so it can be solved for `C` independently of
//! evaluation order; only the first position's equation references `C`
//! (at the wrap-around last position), so it is solved last, once that
//! value is available.

use crate::cipher::scheme_b::ilm::ilm_cosine_sequence;
use crate::constants::DIFFUSION_SCALE;

/// Rotate a row-major `rows × cols` matrix 90° clockwise, returning a
/// `cols × rows` matrix.
fn rotate90_cw<T: Copy>(data: &[T], rows: usize, cols: usize) -> Vec<T> {
    let mut out = data.to_vec();
    for r in 0..rows {
        for c in 0..cols {
            let new_row = c;
            let new_col = rows - 1 - r;
            out[new_row * rows + new_col] = data[r * cols + c];
        }
    }
    out
}

fn argsort(values: &[f64]) -> Vec<usize> {
    let mut idx: Vec<usize> = (0..values.len()).collect();
    idx.sort_by(|&a, &b| values[a].partial_cmp(&values[b]).expect("ILM sequence has no NaNs"));
    idx
}

/// The amplitude sequence `A` (post-rotation) and scatter-index matrix
/// `B`, both flat length `height*width`, shared by every colour plane of
/// one frame (they depend only on `diff_seed` and the post-permutation
/// plane dimensions).
pub struct DiffusionTables {
    pub a: Vec<f64>,
    pub b: Vec<usize>,
    pub height: usize,
    pub width: usize,
}

impl DiffusionTables {
    pub fn derive(height: usize, width: usize, diff_seed: f64) -> Self {
        let hw = height * width;
        let a_seq = ilm_cosine_sequence(hw, diff_seed);
        let a_rot = rotate90_cw(&a_seq, height, width);
        let in_a = argsort(&a_rot);
        let b = rotate90_cw(&in_a, width, height);
        Self { a: a_rot, b, height, width }
    }

    fn prev_index(&self, row: usize, col: usize) -> usize {
        let n = self.width;
        if row == 0 && col == 0 {
            self.b[(self.height - 1) * n + (n - 1)]
        } else if col == 0 {
            self.b[(row - 1) * n + (n - 1)]
        } else {
            self.b[row * n + (col - 1)]
        }
    }

    fn term(&self, bi: usize) -> i64 {
        (DIFFUSION_SCALE * self.a[bi]).floor() as i64
    }
}

/// Diffuse one colour plane (flat, row-major, length `height*width`).
pub fn diffuse_forward(plane: &[u8], tables: &DiffusionTables) -> Vec<u8> {
    let n = tables.width;
    let m = tables.height;
    let mut d = vec![0u8; plane.len()];

    for row in 0..m {
        for col in 0..n {
            let bi = tables.b[row * n + col];
            let t = plane[bi] as i64;
            let prev = if row == 0 && col == 0 {
                plane[tables.prev_index(row, col)] as i64
            } else {
                d[tables.prev_index(row, col)] as i64
            };
            let value = (t + prev + tables.term(bi)).rem_euclid(256);
            d[bi] = value as u8;
        }
    }
    d
}

/// Invert one colour plane's diffusion given the ciphered plane `d`.
pub fn diffuse_inverse(d: &[u8], tables: &DiffusionTables) -> Vec<u8> {
    let n = tables.width;
    let m = tables.height;
    let mut c = vec![0u8; d.len()];
    let mut origin_bi = None;

    for row in 0..m {
        for col in 0..n {
            if row == 0 && col == 0 {
                let bi = tables.b[0];
                origin_bi = Some(bi);
                continue;
            }
            let bi = tables.b[row * n + col];
            let prev = d[tables.prev_index(row, col)] as i64;
            let value = (256 + d[bi] as i64 - prev - tables.term(bi)).rem_euclid(256);
            c[bi] = value as u8;
        }
    }

    let origin_bi = origin_bi.expect("m*n >= 1 guarantees the origin position is visited");
    let last_bi = tables.b[(m - 1) * n + (n - 1)];
    let prev = c[last_bi] as i64;
    let value = (256 + d[origin_bi] as i64 - prev - tables.term(origin_bi)).rem_euclid(256);
    c[origin_bi] = value as u8;

    c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plane(height: usize, width: usize) -> Vec<u8> {
        (0..height * width).map(|i| (i * 37 + 11) as u8).collect()
    }

    #[test]
    fn forward_then_inverse_round_trips() {
        let height = 6;
        let width = 5;
        let original = plane(height, width);
        let tables = DiffusionTables::derive(height, width, 0.61803);

        let diffused = diffuse_forward(&original, &tables);
        assert_ne!(diffused, original);

        let recovered = diffuse_inverse(&diffused, &tables);
        assert_eq!(recovered, original);
    }

    #[test]
    fn scatter_table_is_a_bijection_of_flat_indices() {
        let tables = DiffusionTables::derive(4, 7, 0.1111);
        let mut seen = vec![false; 4 * 7];
        for &bi in &tables.b {
            assert!(!seen[bi], "B must be a bijection over flat indices");
            seen[bi] = true;
        }
    }
}
