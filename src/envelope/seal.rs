//! `seal`/`open` for the key-file envelope (§4.4).
//!
//! Wire format: `base64(salt‖nonce‖ciphertext‖tag)`, written back over the
//! same path the plaintext key file occupied. `salt` and `nonce` are drawn
//! fresh on every `seal` call (via the injectable [`EntropySource`] so
//! tests can drive them deterministically); AES-GCM's tag is appended by
//! the cipher itself, so `ciphertext‖tag` is a single opaque blob here.

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::constants::{ALGORITHM_NONCE_SIZE, PBKDF2_SALT_SIZE};
use crate::crypto::{derive_envelope_key, AeadCipher};
use crate::entropy::EntropySource;
use crate::envelope::types::{EnvelopeConfig, EnvelopeError};

fn io_err(path: &Path, source: std::io::Error) -> EnvelopeError {
    EnvelopeError::Io { path: path.display().to_string(), source }
}

/// Draw `n` random bytes from an [`EntropySource`] by mapping its uniform
/// `[0,1)` samples onto the byte range. Used for the salt/nonce, which the
/// entropy source was not originally built for (it exists to drive Scheme
/// B's chaotic seeds) but which need the same swap-in-a-fixture-for-tests
/// property, so it is reused here rather than reaching for a second trait.
fn draw_bytes(source: &mut dyn EntropySource, n: usize) -> Vec<u8> {
    source
        .sample_uniform(n)
        .into_iter()
        .map(|x| (x * 256.0) as u8)
        .collect()
}

/// Read the plaintext key file at `path`, derive a key from `password`,
/// encrypt it under AES-128-GCM, and overwrite `path` with the base64
/// envelope.
pub fn seal(
    path: &Path,
    password: &[u8],
    config: EnvelopeConfig,
    entropy: &mut dyn EntropySource,
) -> Result<(), EnvelopeError> {
    let plaintext = std::fs::read(path).map_err(|e| io_err(path, e))?;

    let salt = draw_bytes(entropy, PBKDF2_SALT_SIZE);
    let nonce = draw_bytes(entropy, ALGORITHM_NONCE_SIZE);

    let key = derive_envelope_key(password, &salt, config.iterations);
    let cipher = AeadCipher::new(&key)?;
    let ciphertext_and_tag = cipher.seal(&nonce, &plaintext)?;

    let mut blob = Vec::with_capacity(salt.len() + nonce.len() + ciphertext_and_tag.len());
    blob.extend_from_slice(&salt);
    blob.extend_from_slice(&nonce);
    blob.extend_from_slice(&ciphertext_and_tag);

    let encoded = BASE64.encode(blob);
    std::fs::write(path, encoded).map_err(|e| io_err(path, e))
}

/// Read the sealed envelope at `path`, derive a key from `password`,
/// decrypt, and return the plaintext key content in memory; `path` itself
/// is never rewritten. On tag failure, returns
/// [`EnvelopeError::WrongPasswordOrTampered`] distinctly from I/O or
/// framing errors.
pub fn open(path: &Path, password: &[u8], config: EnvelopeConfig) -> Result<Vec<u8>, EnvelopeError> {
    let encoded = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
    let blob = BASE64
        .decode(encoded.trim())
        .map_err(|e| EnvelopeError::MalformedEnvelope(e.to_string()))?;

    let min_len = PBKDF2_SALT_SIZE + ALGORITHM_NONCE_SIZE + crate::constants::ALGORITHM_TAG_SIZE;
    if blob.len() < min_len {
        return Err(EnvelopeError::MalformedEnvelope(format!(
            "envelope too short: {} bytes, need at least {}",
            blob.len(),
            min_len
        )));
    }

    let (salt, rest) = blob.split_at(PBKDF2_SALT_SIZE);
    let (nonce, ciphertext_and_tag) = rest.split_at(ALGORITHM_NONCE_SIZE);

    let key = derive_envelope_key(password, salt, config.iterations);
    let cipher = AeadCipher::new(&key)?;
    let plaintext = cipher.open(nonce, ciphertext_and_tag)?;

    Ok(plaintext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::FixedEntropySource;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("medicipher-test-{}-{}", std::process::id(), name));
        p
    }

    #[test]
    fn seal_then_open_round_trips_in_memory() {
        let path = scratch_path("seal-open");
        std::fs::write(&path, b"aabbccdd\n").unwrap();

        let mut entropy = FixedEntropySource::new(vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8]);
        seal(&path, b"hunter2", EnvelopeConfig::default(), &mut entropy).unwrap();

        let sealed_contents = std::fs::read_to_string(&path).unwrap();
        assert_ne!(sealed_contents.trim(), "aabbccdd");

        let plaintext = open(&path, b"hunter2", EnvelopeConfig::default()).unwrap();
        assert_eq!(plaintext, b"aabbccdd\n");

        let still_sealed = std::fs::read_to_string(&path).unwrap();
        assert_eq!(still_sealed, sealed_contents);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn open_with_wrong_password_fails_closed() {
        let path = scratch_path("wrong-password");
        std::fs::write(&path, b"aabbccdd\n").unwrap();

        let mut entropy = FixedEntropySource::new(vec![0.11, 0.22, 0.33, 0.44]);
        seal(&path, b"correct-horse", EnvelopeConfig::default(), &mut entropy).unwrap();

        let result = open(&path, b"wrong-password", EnvelopeConfig::default());
        assert!(matches!(result, Err(EnvelopeError::WrongPasswordOrTampered)));

        std::fs::remove_file(&path).ok();
    }
}
