//! pipeline — C5: orchestrates C1 (frame I/O), C2/C3 (the per-frame
//! cipher), and C4 (the key-file envelope) into the end-to-end
//! encrypt/decrypt flows, driven by an explicit state machine (§4.5).

pub mod decrypt;
pub mod encrypt;
pub mod source_sink;
pub mod state;
pub mod types;

pub use decrypt::{decrypt as decrypt_video, DecryptReport};
pub use encrypt::{encrypt_scheme_a, encrypt_scheme_b, EncryptReport, PipelineConfig};
pub use state::{PipelineState, StateMachine};
pub use types::PipelineError;

use std::path::Path;

use crate::entropy::{CsprngEntropySource, EntropySource};
use crate::envelope::{EnvelopeConfig, Scheme};
use crate::pipeline::source_sink::{FrameSink, FrameSource};

/// Single entry point for the end-to-end flows, dispatching to the
/// scheme-specific orchestration in [`encrypt`]/[`decrypt`].
pub struct VideoPipeline;

impl VideoPipeline {
    /// Encrypt `source` under `scheme`, writing ciphered frames to `sink`
    /// and the sealed key file to `key_file_path`.
    pub fn encrypt(
        scheme: Scheme,
        source: &mut dyn FrameSource,
        sink: &mut dyn FrameSink,
        output_path: &Path,
        key_file_path: &Path,
        password: &[u8],
        config: PipelineConfig,
        mut is_cancelled: impl FnMut() -> bool,
    ) -> Result<EncryptReport, PipelineError> {
        match scheme {
            Scheme::A => encrypt_scheme_a(
                source,
                sink,
                output_path,
                key_file_path,
                password,
                config,
                &mut is_cancelled,
            ),
            Scheme::B => {
                let mut entropy = CsprngEntropySource;
                encrypt_scheme_b(
                    source,
                    sink,
                    output_path,
                    key_file_path,
                    password,
                    config,
                    &mut entropy,
                    &mut is_cancelled,
                )
            }
        }
    }

    /// Decrypt `source` previously sealed under `scheme`, writing
    /// plaintext frames to `sink`.
    pub fn decrypt(
        scheme: Scheme,
        source: &mut dyn FrameSource,
        sink: &mut dyn FrameSink,
        key_file_path: &Path,
        password: &[u8],
        envelope_config: EnvelopeConfig,
    ) -> Result<DecryptReport, PipelineError> {
        decrypt_video(scheme, source, sink, key_file_path, password, envelope_config)
    }
}

// Exercises an explicit `EntropySource` parameter rather than always
// constructing a fresh `CsprngEntropySource`, for callers (and tests)
// that need to control Scheme B's randomness.
pub fn encrypt_with_entropy(
    scheme: Scheme,
    source: &mut dyn FrameSource,
    sink: &mut dyn FrameSink,
    output_path: &Path,
    key_file_path: &Path,
    password: &[u8],
    config: PipelineConfig,
    entropy: &mut dyn EntropySource,
    mut is_cancelled: impl FnMut() -> bool,
) -> Result<EncryptReport, PipelineError> {
    match scheme {
        Scheme::A => {
            encrypt_scheme_a(source, sink, output_path, key_file_path, password, config, &mut is_cancelled)
        }
        Scheme::B => encrypt_scheme_b(
            source,
            sink,
            output_path,
            key_file_path,
            password,
            config,
            entropy,
            &mut is_cancelled,
        ),
    }
}
