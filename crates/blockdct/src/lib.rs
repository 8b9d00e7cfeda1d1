//! # blockdct
//!
//! Block DCT/IDCT and the pixel-matrix adapter of a JPEG-style codec.
//!
//! ## Quick Start
//!
//! ```
//! use blockdct::{process_channel, ChannelOrder, PixelMatrix, TransformEngine};
//!
//! // 10x10 BGR buffer, tightly packed
//! let raw = vec![128u8; 10 * 10 * 3];
//! let mut matrix = PixelMatrix::from_buffer(&raw, 10, 10, 30, ChannelOrder::Bgr).unwrap();
//! assert_eq!((matrix.width(), matrix.height()), (8, 8));
//!
//! let engine = TransformEngine::new(8).unwrap();
//! for channel in 0..3 {
//!     process_channel(&engine, &mut matrix, channel, |coefficients| {
//!         // quantization would happen here
//!         let _dc = coefficients[(0, 0)];
//!     })
//!     .unwrap();
//! }
//!
//! let packed = matrix.to_buffer();
//! assert_eq!(packed.len(), 8 * 8 * 3);
//! ```
//!
//! ## Features
//!
//! - Orthonormal basis-matrix DCT for any block size
//! - Allocation-free 8x8 path
//! - Cropping, stride-aware raw buffer import and clamped export
//! - Scoped access to lockable surfaces
//! - RGB and YCbCr pixels
//! - Multi-threaded row and block passes

// Re-export core types
pub use blockdct_core::{
    clamped_byte, consts, Block, BufferOptions, ChannelOrder, ColorSpace, DctError, DctResult,
    Dimensions, LockMode, Pixel, PixelMatrix, RawSurface, Surface, SurfaceLock,
};

// Re-export transforms
pub use blockdct_transform::{
    dct8x8_forward, dct8x8_inverse, extract_block, forward_channel, inverse_channel,
    matrix_multiply, process_channel, store_block, BlockGrid, TransformEngine,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
