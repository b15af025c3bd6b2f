//! Encryption orchestration (C5, §4.5): drive the per-frame cipher in
//! plaintext order, accumulate key material, and seal the key file once
//! the ciphered output is fully flushed.

use std::path::Path;
use std::time::Instant;

use crate::cipher::{scheme_a, scheme_b};
use crate::entropy::{CsprngEntropySource, EntropySource};
use crate::envelope::{seal_key_file, EnvelopeConfig};
use crate::keyfile::{format_scheme_a, format_scheme_b, CosKey, FrameOrder, FyKey};
use crate::pipeline::source_sink::{FrameSink, FrameSource};
use crate::pipeline::state::{PipelineState, StateMachine};
use crate::pipeline::types::PipelineError;
use crate::telemetry::{Stage, StageTimes, TelemetrySnapshot};

/// Tunables beyond the per-frame cipher itself.
pub struct PipelineConfig {
    /// Stop after this many frames even if the source has more — a
    /// testing knob carried over from the original implementation's
    /// verbose-trace harness, not an operator-facing feature.
    pub frame_limit: Option<u32>,
    pub envelope: EnvelopeConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self { frame_limit: None, envelope: EnvelopeConfig::default() }
    }
}

pub struct EncryptReport {
    pub frames_ciphered: u64,
    pub telemetry: TelemetrySnapshot,
}

fn delete_partial_outputs(key_file_path: &Path, output_path: &Path) {
    let _ = std::fs::remove_file(key_file_path);
    let _ = std::fs::remove_file(output_path);
}

/// Encrypt under Scheme A: stream each frame's `FYKey` straight to the
/// in-progress key file content, then seal once the video is closed.
pub fn encrypt_scheme_a(
    source: &mut dyn FrameSource,
    sink: &mut dyn FrameSink,
    output_path: &Path,
    key_file_path: &Path,
    password: &[u8],
    config: PipelineConfig,
    mut is_cancelled: impl FnMut() -> bool,
) -> Result<EncryptReport, PipelineError> {
    let mut sm = StateMachine::default();
    sm.transition(PipelineState::Opened)?;

    let mut keys: Vec<FyKey> = Vec::new();
    let mut telemetry = TelemetrySnapshot::default();
    let mut index: u64 = 0;

    loop {
        if let Some(limit) = config.frame_limit {
            if index >= limit as u64 {
                break;
            }
        }
        if is_cancelled() {
            sm.transition(PipelineState::Aborted).ok();
            delete_partial_outputs(key_file_path, output_path);
            return Err(PipelineError::Cancelled);
        }

        let frame_start = Instant::now();
        let read_start = Instant::now();
        let frame = match source.next_frame() {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                sm.transition(PipelineState::Failed).ok();
                delete_partial_outputs(key_file_path, output_path);
                return Err(e.into());
            }
        };
        let mut stage_times = StageTimes::default();
        stage_times.add(Stage::FrameRead, read_start.elapsed());

        sm.transition(PipelineState::Ciphering)?;

        let encrypted = scheme_a::encrypt_frame(&frame);
        for (stage, duration) in encrypted.stage_times.iter() {
            stage_times.add(*stage, *duration);
        }

        let write_start = Instant::now();
        if let Err(e) = sink.write_frame(&encrypted.frame) {
            sm.transition(PipelineState::Failed).ok();
            delete_partial_outputs(key_file_path, output_path);
            return Err(e.into());
        }
        stage_times.add(Stage::FrameWrite, write_start.elapsed());

        match FyKey::new(encrypted.fy_key) {
            Ok(key) => keys.push(key),
            Err(e) => {
                sm.transition(PipelineState::Failed).ok();
                delete_partial_outputs(key_file_path, output_path);
                return Err(e.into());
            }
        }

        telemetry.record(index, frame_start.elapsed(), stage_times);
        index += 1;
    }

    finalize_and_seal(&mut sm, sink, output_path, key_file_path, password, &config, format_scheme_a(&keys))?;

    Ok(EncryptReport { frames_ciphered: index, telemetry })
}

/// Encrypt under Scheme B: cipher every frame, buffering the ciphered
/// rasters in memory; at end-of-stream draw `FrameOrder`, reorder, and
/// emit.
pub fn encrypt_scheme_b(
    source: &mut dyn FrameSource,
    sink: &mut dyn FrameSink,
    output_path: &Path,
    key_file_path: &Path,
    password: &[u8],
    config: PipelineConfig,
    entropy: &mut dyn EntropySource,
    mut is_cancelled: impl FnMut() -> bool,
) -> Result<EncryptReport, PipelineError> {
    let mut sm = StateMachine::default();
    sm.transition(PipelineState::Opened)?;

    let mut seeds: Vec<CosKey> = Vec::new();
    let mut buffered = Vec::new();
    let mut telemetry = TelemetrySnapshot::default();
    let mut index: u64 = 0;

    loop {
        if let Some(limit) = config.frame_limit {
            if index >= limit as u64 {
                break;
            }
        }
        if is_cancelled() {
            sm.transition(PipelineState::Aborted).ok();
            delete_partial_outputs(key_file_path, output_path);
            return Err(PipelineError::Cancelled);
        }

        let frame_start = Instant::now();
        let read_start = Instant::now();
        let frame = match source.next_frame() {
            Ok(Some(f)) => f,
            Ok(None) => break,
            Err(e) => {
                sm.transition(PipelineState::Failed).ok();
                delete_partial_outputs(key_file_path, output_path);
                return Err(e.into());
            }
        };
        let mut stage_times = StageTimes::default();
        stage_times.add(Stage::FrameRead, read_start.elapsed());

        sm.transition(PipelineState::Ciphering)?;

        let encrypted = scheme_b::encrypt_frame(&frame, entropy);
        for (stage, duration) in encrypted.stage_times.iter() {
            stage_times.add(*stage, *duration);
        }
        seeds.push(CosKey { perm_seed: encrypted.perm_seed, diff_seed: encrypted.diff_seed });
        buffered.push(encrypted.frame);

        telemetry.record(index, frame_start.elapsed(), stage_times);
        index += 1;
    }

    let n = buffered.len();
    let order_values = draw_frame_order(n, entropy);
    let order = FrameOrder::new(order_values).map_err(|e| {
        delete_partial_outputs(key_file_path, output_path);
        PipelineError::from(e)
    })?;

    for &plaintext_index in order.as_slice() {
        let write_start = Instant::now();
        if let Err(e) = sink.write_frame(&buffered[plaintext_index as usize]) {
            sm.transition(PipelineState::Failed).ok();
            delete_partial_outputs(key_file_path, output_path);
            return Err(e.into());
        }
        telemetry.record(n as u64, write_start.elapsed(), StageTimes::default());
    }

    finalize_and_seal(&mut sm, sink, output_path, key_file_path, password, &config, format_scheme_b(&seeds, &order))?;

    Ok(EncryptReport { frames_ciphered: index, telemetry })
}

/// Draw a uniform random permutation of `[0, n)` using Fisher-Yates
/// fed by the injectable entropy source (§4.3 "Whole-video frame-order
/// shuffle"). Reuses the same capability the seed draw uses rather than
/// introducing a second randomness trait.
fn draw_frame_order(n: usize, entropy: &mut dyn EntropySource) -> Vec<u32> {
    let mut order: Vec<u32> = (0..n as u32).collect();
    if n < 2 {
        return order;
    }
    for i in (1..n).rev() {
        let x = entropy.sample_uniform(1)[0];
        let j = (x * (i + 1) as f64) as usize;
        order.swap(i, j.min(i));
    }
    order
}

fn finalize_and_seal(
    sm: &mut StateMachine,
    sink: &mut dyn FrameSink,
    output_path: &Path,
    key_file_path: &Path,
    password: &[u8],
    config: &PipelineConfig,
    key_content: String,
) -> Result<(), PipelineError> {
    sm.transition(PipelineState::Finalising)?;

    if let Err(e) = sink.finalize() {
        sm.transition(PipelineState::Failed).ok();
        delete_partial_outputs(key_file_path, output_path);
        return Err(e.into());
    }

    if let Err(e) = std::fs::write(key_file_path, key_content) {
        sm.transition(PipelineState::Failed).ok();
        delete_partial_outputs(key_file_path, output_path);
        return Err(e.into());
    }

    let mut csprng = CsprngEntropySource;
    if let Err(e) = seal_key_file(key_file_path, password, config.envelope, &mut csprng) {
        sm.transition(PipelineState::Failed).ok();
        delete_partial_outputs(key_file_path, output_path);
        return Err(e.into());
    }

    sm.transition(PipelineState::Sealed)?;
    sm.transition(PipelineState::Done)?;
    Ok(())
}
