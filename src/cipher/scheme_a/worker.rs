//! Per-frame Scheme-A worker: derives the key from the plaintext hash,
//! then drives permutation and diffusion in the required order.
//! Grounded on the teacher's `frame_worker::{encrypt, decrypt}` shape —
//! one pure function per direction, timed per stage — narrowed to a
//! single-threaded call (§5: no hidden frame-level parallelism).

use std::time::Instant;

use crate::cipher::frame::Frame;
use crate::cipher::scheme_a::diffuse::diffuse;
use crate::cipher::scheme_a::key::{derive_key, derive_key_from_frame_bytes};
use crate::cipher::scheme_a::permute::{permute_forward, permute_inverse};
use crate::telemetry::{Stage, StageTimes};

/// Result of ciphering one frame under Scheme A: the ciphered raster and
/// the `FYKey` hex digest to append to the key file.
pub struct EncryptedFrame {
    pub frame: Frame,
    pub fy_key: String,
    pub stage_times: StageTimes,
}

/// Encrypt one plaintext frame: permute, then diffuse.
pub fn encrypt_frame(plaintext: &Frame) -> EncryptedFrame {
    let mut stage_times = StageTimes::default();

    let start = Instant::now();
    let (fy_key, key) = derive_key_from_frame_bytes(plaintext.as_bytes());
    stage_times.add(Stage::Hash, start.elapsed());

    let start = Instant::now();
    let mut permuted = plaintext.clone();
    permute_forward(&mut permuted, key.r_perm, key.x0_perm);
    stage_times.add(Stage::Permute, start.elapsed());

    let start = Instant::now();
    let ciphered = diffuse(&permuted, key.r_diff, key.x0_diff);
    stage_times.add(Stage::Diffuse, start.elapsed());

    EncryptedFrame { frame: ciphered, fy_key, stage_times }
}

/// Decrypt one ciphered frame given its recorded `FYKey` hex digest.
pub fn decrypt_frame(ciphered: &Frame, fy_key: &str) -> (Frame, StageTimes) {
    let mut stage_times = StageTimes::default();

    let start = Instant::now();
    let key = derive_key(fy_key);
    stage_times.add(Stage::Hash, start.elapsed());

    let start = Instant::now();
    let de_diffused = diffuse(ciphered, key.r_diff, key.x0_diff);
    stage_times.add(Stage::Diffuse, start.elapsed());

    let start = Instant::now();
    let mut plaintext = de_diffused;
    permute_inverse(&mut plaintext, key.r_perm, key.x0_perm);
    stage_times.add(Stage::Permute, start.elapsed());

    (plaintext, stage_times)
}
