//! Block transforms
//!
//! This crate implements the 2-D DCT/IDCT over N×N blocks, an allocation-free
//! 8x8 variant, and block-grid passes that drive the transform over a channel
//! of a `PixelMatrix`.

pub mod blocks;
pub mod dct;
pub mod dct_fixed;

pub use blocks::*;
pub use dct::*;
pub use dct_fixed::*;
