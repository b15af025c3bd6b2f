//! End-to-end pipeline tests (§8 S1-S2): encrypt a synthetic in-memory
//! video under each scheme, then decrypt it back and assert bit-exact
//! plaintext recovery, driven entirely through `VideoPipeline`.

use medicipher_core::cipher::Frame;
use medicipher_core::entropy::FixedEntropySource;
use medicipher_core::envelope::{EnvelopeConfig, Scheme};
use medicipher_core::pipeline::source_sink::{MemoryFrameSink, MemoryFrameSource, OutputCodec, SinkConfig};
use medicipher_core::pipeline::{encrypt_with_entropy, PipelineConfig, VideoPipeline};

fn scratch_path(name: &str) -> std::path::PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("medicipher-pipeline-test-{}-{}", std::process::id(), name));
    p
}

fn synthetic_frames(count: usize, height: usize, width: usize) -> Vec<Frame> {
    (0..count)
        .map(|i| {
            let mut bytes = vec![0u8; height * width * 3];
            for (j, b) in bytes.iter_mut().enumerate() {
                *b = ((i * 37 + j * 11) % 251) as u8;
            }
            Frame::new(height, width, bytes)
        })
        .collect()
}

#[test]
fn scheme_a_round_trips_end_to_end() {
    let height = 6;
    let width = 8;
    let frames = synthetic_frames(4, height, width);

    let key_file_path = scratch_path("scheme-a.key");
    let output_path = scratch_path("scheme-a.out");

    let mut source = MemoryFrameSource::new(height, width, 30.0, frames.clone());
    let sink_config = SinkConfig { height, width, frame_rate: 30.0, codec: OutputCodec::HuffYuv };
    let mut sink = MemoryFrameSink::new(sink_config);

    let report = VideoPipeline::encrypt(
        Scheme::A,
        &mut source,
        &mut sink,
        &output_path,
        &key_file_path,
        b"correct horse battery staple",
        PipelineConfig::default(),
        || false,
    )
    .unwrap();
    assert_eq!(report.frames_ciphered, 4);

    let ciphered_frames = sink.into_frames();
    assert_eq!(ciphered_frames.len(), 4);
    assert_ne!(ciphered_frames[0].as_bytes(), frames[0].as_bytes());

    let mut decrypt_source = MemoryFrameSource::new(height, width, 30.0, ciphered_frames);
    let decrypt_sink_config = SinkConfig { height, width, frame_rate: 30.0, codec: OutputCodec::Mp4v };
    let mut decrypt_sink = MemoryFrameSink::new(decrypt_sink_config);

    let decrypt_report = VideoPipeline::decrypt(
        Scheme::A,
        &mut decrypt_source,
        &mut decrypt_sink,
        &key_file_path,
        b"correct horse battery staple",
        EnvelopeConfig::default(),
    )
    .unwrap();
    assert_eq!(decrypt_report.frames_deciphered, 4);

    let recovered = decrypt_sink.into_frames();
    for (original, got) in frames.iter().zip(recovered.iter()) {
        assert_eq!(original.as_bytes(), got.as_bytes());
    }

    std::fs::remove_file(&key_file_path).ok();
}

#[test]
fn scheme_b_round_trips_end_to_end_with_shuffled_order() {
    let height = 5;
    let width = 5;
    let frames = synthetic_frames(3, height, width);

    let key_file_path = scratch_path("scheme-b.key");
    let output_path = scratch_path("scheme-b.out");

    let mut source = MemoryFrameSource::new(height, width, 24.0, frames.clone());
    let sink_config = SinkConfig { height, width, frame_rate: 24.0, codec: OutputCodec::HuffYuv };
    let mut sink = MemoryFrameSink::new(sink_config);

    let mut entropy = FixedEntropySource::new(vec![
        0.05, 0.91, 0.33, 0.62, 0.17, 0.48, 0.72, 0.08, 0.55, 0.21, 0.39, 0.84,
    ]);

    let report = encrypt_with_entropy(
        Scheme::B,
        &mut source,
        &mut sink,
        &output_path,
        &key_file_path,
        b"s3cr3t",
        PipelineConfig::default(),
        &mut entropy,
        || false,
    )
    .unwrap();
    assert_eq!(report.frames_ciphered, 3);

    let ciphered_frames = sink.into_frames();
    assert_eq!(ciphered_frames.len(), 3);

    // Scheme B transposes dimensions via the 90-degree rotation coupling.
    let mut decrypt_source = MemoryFrameSource::new(width, height, 24.0, ciphered_frames);
    let decrypt_sink_config = SinkConfig { height, width, frame_rate: 24.0, codec: OutputCodec::Mp4v };
    let mut decrypt_sink = MemoryFrameSink::new(decrypt_sink_config);

    let decrypt_report = VideoPipeline::decrypt(
        Scheme::B,
        &mut decrypt_source,
        &mut decrypt_sink,
        &key_file_path,
        b"s3cr3t",
        EnvelopeConfig::default(),
    )
    .unwrap();
    assert_eq!(decrypt_report.frames_deciphered, 3);

    let recovered = decrypt_sink.into_frames();
    for (original, got) in frames.iter().zip(recovered.iter()) {
        assert_eq!(original.as_bytes(), got.as_bytes());
    }

    std::fs::remove_file(&key_file_path).ok();
}

#[test]
fn wrong_password_fails_closed_before_any_frame_is_written() {
    let height = 4;
    let width = 4;
    let frames = synthetic_frames(2, height, width);

    let key_file_path = scratch_path("wrong-password.key");
    let output_path = scratch_path("wrong-password.out");

    let mut source = MemoryFrameSource::new(height, width, 30.0, frames);
    let sink_config = SinkConfig { height, width, frame_rate: 30.0, codec: OutputCodec::HuffYuv };
    let mut sink = MemoryFrameSink::new(sink_config);

    VideoPipeline::encrypt(
        Scheme::A,
        &mut source,
        &mut sink,
        &output_path,
        &key_file_path,
        b"correct-password",
        PipelineConfig::default(),
        || false,
    )
    .unwrap();

    let ciphered_frames = sink.into_frames();
    let mut decrypt_source = MemoryFrameSource::new(height, width, 30.0, ciphered_frames);
    let decrypt_sink_config = SinkConfig { height, width, frame_rate: 30.0, codec: OutputCodec::Mp4v };
    let mut decrypt_sink = MemoryFrameSink::new(decrypt_sink_config);

    let result = VideoPipeline::decrypt(
        Scheme::A,
        &mut decrypt_source,
        &mut decrypt_sink,
        &key_file_path,
        b"wrong-password",
        EnvelopeConfig::default(),
    );
    assert!(result.is_err());
    assert!(decrypt_sink.frames().is_empty());

    std::fs::remove_file(&key_file_path).ok();
}

#[test]
fn cancellation_aborts_and_deletes_partial_outputs() {
    let height = 4;
    let width = 4;
    let frames = synthetic_frames(5, height, width);

    let key_file_path = scratch_path("cancel.key");
    let output_path = scratch_path("cancel.out");

    let mut source = MemoryFrameSource::new(height, width, 30.0, frames);
    let sink_config = SinkConfig { height, width, frame_rate: 30.0, codec: OutputCodec::HuffYuv };
    let mut sink = MemoryFrameSink::new(sink_config);

    let mut seen = 0;
    let result = VideoPipeline::encrypt(
        Scheme::A,
        &mut source,
        &mut sink,
        &output_path,
        &key_file_path,
        b"pw",
        PipelineConfig::default(),
        move || {
            seen += 1;
            seen > 2
        },
    );

    assert!(matches!(result, Err(medicipher_core::pipeline::PipelineError::Cancelled)));
    assert!(!key_file_path.exists());
}
