//! Key-file record types shared by Scheme A and Scheme B (§6.4).

use std::fmt;

/// A Scheme-A key record: one SHA-512 hex digest per plaintext frame.
/// Invariant: exactly [`crate::constants::FYKEY_HEX_LEN`] lowercase hex
/// characters (§3, §4.2).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FyKey(String);

impl FyKey {
    pub fn new(hex: String) -> Result<Self, KeyFileError> {
        if hex.len() != crate::constants::FYKEY_HEX_LEN
            || !hex.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase())
        {
            return Err(KeyFileError::InvalidFyKeyLine(hex));
        }
        Ok(Self(hex))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A Scheme-B per-frame record: the permutation seed and diffusion seed
/// drawn for one plaintext frame (§4.3).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CosKey {
    pub perm_seed: f64,
    pub diff_seed: f64,
}

/// A bijection of `[0, N)` describing how Scheme-B ciphered frames were
/// shuffled into output order (§3, §4.3). The final record of a Scheme-B
/// key file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameOrder(Vec<u32>);

impl FrameOrder {
    /// Construct from a list of indices, verifying it is a bijection of
    /// `[0, values.len())`.
    pub fn new(values: Vec<u32>) -> Result<Self, KeyFileError> {
        let n = values.len();
        let mut seen = vec![false; n];
        for &v in &values {
            let idx = v as usize;
            if idx >= n || seen[idx] {
                return Err(KeyFileError::NotABijection { len: n });
            }
            seen[idx] = true;
        }
        Ok(Self(values))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Render as the bracketed, comma-separated decimal form the key
    /// file stores (`[3, 0, 2, 1]`, §6.4).
    pub fn to_literal(&self) -> String {
        let mut s = String::from("[");
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                s.push_str(", ");
            }
            s.push_str(&v.to_string());
        }
        s.push(']');
        s
    }
}

#[derive(Debug)]
pub enum KeyFileError {
    /// A Scheme-A line was not exactly 128 lowercase hex characters.
    InvalidFyKeyLine(String),

    /// A Scheme-B seed line did not parse as a decimal float.
    InvalidSeedLine(String),

    /// The `FrameOrder` literal line failed strict bracketed-list parsing.
    MalformedFrameOrder(String),

    /// `FrameOrder` parsed but was not a bijection of `[0, N)`.
    NotABijection { len: usize },

    /// Key file had the wrong number of lines for its scheme.
    WrongLineCount { expected: usize, actual: usize },
}

impl fmt::Display for KeyFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use KeyFileError::*;
        match self {
            InvalidFyKeyLine(line) => write!(f, "invalid FYKey line: {:?}", line),
            InvalidSeedLine(line) => write!(f, "invalid seed line: {:?}", line),
            MalformedFrameOrder(line) => write!(f, "malformed FrameOrder literal: {:?}", line),
            NotABijection { len } => write!(f, "FrameOrder is not a bijection of [0, {})", len),
            WrongLineCount { expected, actual } => {
                write!(f, "wrong key-file line count: expected {}, found {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for KeyFileError {}
