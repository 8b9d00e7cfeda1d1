//! Constants shared by the transform engine and the pixel matrix

/// Default transform block size (8x8, as in baseline JPEG)
pub const DEFAULT_BLOCK_SIZE: usize = 8;

/// Packed raw buffers carry three bytes per pixel, no alpha
pub const BYTES_PER_PIXEL: usize = 3;

/// Number of color components in a pixel
pub const NUM_COMPONENTS: usize = 3;

/// Sample range of a materialized byte
pub const MIN_SAMPLE: f64 = 0.0;
pub const MAX_SAMPLE: f64 = 255.0;

/// Chroma offset for full-range YCbCr
pub const CHROMA_OFFSET: f64 = 128.0;
