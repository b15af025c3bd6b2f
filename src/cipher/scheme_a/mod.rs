//! scheme_a — logistic-map Fisher-Yates frame cipher (C2, §4.2).

pub mod diffuse;
pub mod key;
pub mod logistic;
pub mod permute;
pub mod worker;

pub use key::{derive_key, SchemeAKey};
pub use worker::{decrypt_frame, encrypt_frame, EncryptedFrame};
