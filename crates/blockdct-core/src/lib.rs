//! Core types for block DCT image processing
//!
//! This crate provides the data structures shared by the transform engine and
//! the pixel pipeline: sample blocks, floating-point pixels, the pixel matrix
//! that bridges raw interleaved buffers, lockable surfaces, and error types.

pub mod block;
pub mod consts;
pub mod error;
pub mod matrix;
pub mod pixel;
pub mod surface;
pub mod types;

pub use block::Block;
pub use error::{DctError, DctResult};
pub use matrix::*;
pub use pixel::Pixel;
pub use surface::*;
pub use types::*;
