//! Decryption orchestration (C5, §4.5): open the sealed key file, gate
//! it against the requested scheme, then drive the matching per-frame
//! inverse cipher.

use std::path::Path;
use std::time::Instant;

use crate::cipher::{scheme_a, scheme_b};
use crate::envelope::{self, EnvelopeConfig, Scheme};
use crate::keyfile::{parse_scheme_a, parse_scheme_b};
use crate::pipeline::source_sink::{FrameSink, FrameSource};
use crate::pipeline::state::{PipelineState, StateMachine};
use crate::pipeline::types::PipelineError;
use crate::telemetry::{Stage, StageTimes, TelemetrySnapshot};

pub struct DecryptReport {
    pub frames_deciphered: u64,
    pub telemetry: TelemetrySnapshot,
}

fn truncated_key_file(key_file_path: &Path) -> PipelineError {
    let _ = key_file_path;
    PipelineError::Validation("video ended before key file material was exhausted".to_string())
}

/// Decrypt a video previously sealed under `scheme`. The video must not
/// have been re-encoded since encryption (§6.2).
pub fn decrypt(
    scheme: Scheme,
    source: &mut dyn FrameSource,
    sink: &mut dyn FrameSink,
    key_file_path: &Path,
    password: &[u8],
    envelope_config: EnvelopeConfig,
) -> Result<DecryptReport, PipelineError> {
    let mut sm = StateMachine::default();
    sm.transition(PipelineState::Opened)?;

    let raw = envelope::open(key_file_path, password, envelope_config)?;
    let key_content = String::from_utf8(raw).map_err(|e| PipelineError::Validation(e.to_string()))?;

    let first_line = key_content.lines().next().unwrap_or_default();
    envelope::check_scheme(first_line, scheme)?;

    let mut telemetry = TelemetrySnapshot::default();
    let mut index: u64 = 0;

    match scheme {
        Scheme::A => {
            let keys = parse_scheme_a(&key_content)?;
            for fy_key in &keys {
                sm.transition(PipelineState::Ciphering)?;

                let frame_start = Instant::now();
                let read_start = Instant::now();
                let frame = match source.next_frame() {
                    Ok(Some(f)) => f,
                    Ok(None) => {
                        sm.transition(PipelineState::Failed).ok();
                        return Err(truncated_key_file(key_file_path));
                    }
                    Err(e) => {
                        sm.transition(PipelineState::Failed).ok();
                        return Err(e.into());
                    }
                };
                let mut stage_times = StageTimes::default();
                stage_times.add(Stage::FrameRead, read_start.elapsed());

                let (plaintext, dec_stage_times) = scheme_a::decrypt_frame(&frame, fy_key.as_str());
                for (stage, duration) in dec_stage_times.iter() {
                    stage_times.add(*stage, *duration);
                }

                let write_start = Instant::now();
                if let Err(e) = sink.write_frame(&plaintext) {
                    sm.transition(PipelineState::Failed).ok();
                    return Err(e.into());
                }
                stage_times.add(Stage::FrameWrite, write_start.elapsed());

                telemetry.record(index, frame_start.elapsed(), stage_times);
                index += 1;
            }
        }
        Scheme::B => {
            let (seeds, order) = parse_scheme_b(&key_content)?;

            // The video on disk is in shuffled (output) order; buffer it
            // so the plaintext frame order can be reconstructed before
            // any frame is emitted.
            let mut shuffled = Vec::with_capacity(seeds.len());
            for _ in 0..seeds.len() {
                match source.next_frame() {
                    Ok(Some(f)) => shuffled.push(f),
                    Ok(None) => {
                        sm.transition(PipelineState::Failed).ok();
                        return Err(truncated_key_file(key_file_path));
                    }
                    Err(e) => {
                        sm.transition(PipelineState::Failed).ok();
                        return Err(e.into());
                    }
                }
            }
            sm.transition(PipelineState::Ciphering)?;

            // `order.as_slice()[shuffled_pos] == plaintext_index`; invert
            // it so each plaintext index can look up its shuffled slot.
            let mut shuffled_pos_of = vec![0usize; seeds.len()];
            for (shuffled_pos, &plaintext_index) in order.as_slice().iter().enumerate() {
                shuffled_pos_of[plaintext_index as usize] = shuffled_pos;
            }

            for (plaintext_index, seed) in seeds.iter().enumerate() {
                let frame_start = Instant::now();
                let ciphered = &shuffled[shuffled_pos_of[plaintext_index]];

                let (plaintext, dec_stage_times) = scheme_b::decrypt_frame(ciphered, seed.perm_seed, seed.diff_seed);
                let mut stage_times = dec_stage_times;

                let write_start = Instant::now();
                if let Err(e) = sink.write_frame(&plaintext) {
                    sm.transition(PipelineState::Failed).ok();
                    return Err(e.into());
                }
                stage_times.add(Stage::FrameWrite, write_start.elapsed());

                telemetry.record(plaintext_index as u64, frame_start.elapsed(), stage_times);
                index += 1;
            }
        }
    }

    sm.transition(PipelineState::Finalising)?;
    if let Err(e) = sink.finalize() {
        sm.transition(PipelineState::Failed).ok();
        return Err(e.into());
    }
    sm.transition(PipelineState::Sealed)?;
    sm.transition(PipelineState::Done)?;

    Ok(DecryptReport { frames_deciphered: index, telemetry })
}
