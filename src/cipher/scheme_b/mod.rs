//! scheme_b — ILM-cosine block-permutation + modular diffusion frame
//! cipher (C3, §4.3).

pub mod bignum;
pub mod diffuse;
pub mod entropy_seed;
pub mod ilm;
pub mod permute;
pub mod worker;

pub use entropy_seed::draw_frame_seeds;
pub use worker::{decrypt_frame, encrypt_frame, EncryptedFrame};
