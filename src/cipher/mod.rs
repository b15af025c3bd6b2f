//! cipher — the two per-frame keyed permutation/diffusion pipelines
//! (C2, C3) and the BGR raster type they share.

pub mod frame;
pub mod scheme_a;
pub mod scheme_b;

pub use frame::Frame;
