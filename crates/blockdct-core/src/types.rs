//! Core value types

use crate::consts::{MAX_SAMPLE, MIN_SAMPLE};
use num_traits::{Float, ToPrimitive};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Color space a pixel's components are expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorSpace {
    /// Red, green, blue
    #[default]
    Rgb,
    /// Full-range JFIF luma/chroma
    YCbCr,
}

/// Byte order of the three components of a packed pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ChannelOrder {
    /// Red first
    Rgb,
    /// Blue first, as delivered by a typical locked bitmap surface
    #[default]
    Bgr,
}

impl ChannelOrder {
    /// Byte offsets of the red, green and blue components inside a packed pixel
    pub fn offsets(&self) -> [usize; 3] {
        match self {
            ChannelOrder::Rgb => [0, 1, 2],
            ChannelOrder::Bgr => [2, 1, 0],
        }
    }
}

/// Matrix dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    pub width: usize,
    pub height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// `width * height`, or `None` on overflow
    pub fn checked_pixel_count(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// Truncate both sides down to the nearest multiple of `block_size`
    pub fn cropped_to(&self, block_size: usize) -> Self {
        Self {
            width: self.width - self.width % block_size,
            height: self.height - self.height % block_size,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Round a sample into the displayable byte range.
///
/// `clamped_byte(x) = round(clamp(x, 0, 255))`. NaN maps to 0.
pub fn clamped_byte<T: Float>(value: T) -> u8 {
    let value = ToPrimitive::to_f64(&value).unwrap_or(MIN_SAMPLE);
    value.clamp(MIN_SAMPLE, MAX_SAMPLE).round() as u8
}
