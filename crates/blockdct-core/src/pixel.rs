//! Floating-point pixels
//!
//! Components are kept as `f64` so transform round-trip error survives until
//! the pixel is materialized into bytes. Conversion between RGB and YCbCr uses
//! the JFIF/BT.601 full-range coefficients:
//! - Y  =  0.299 * R + 0.587 * G + 0.114 * B
//! - Cb = -0.168736 * R - 0.331264 * G + 0.5 * B + 128
//! - Cr =  0.5 * R - 0.418688 * G - 0.081312 * B + 128

use crate::consts::{CHROMA_OFFSET, NUM_COMPONENTS};
use crate::ColorSpace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A three-component pixel tagged with its color space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pixel {
    pub components: [f64; NUM_COMPONENTS],
    pub color_space: ColorSpace,
}

impl Pixel {
    pub fn new(c0: f64, c1: f64, c2: f64, color_space: ColorSpace) -> Self {
        Self {
            components: [c0, c1, c2],
            color_space,
        }
    }

    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, ColorSpace::Rgb)
    }

    pub fn ycbcr(y: f64, cb: f64, cr: f64) -> Self {
        Self::new(y, cb, cr, ColorSpace::YCbCr)
    }

    /// Component `index` (0..3) in the pixel's own color space
    pub fn component(&self, index: usize) -> f64 {
        self.components[index]
    }

    pub fn set_component(&mut self, index: usize, value: f64) {
        self.components[index] = value;
    }

    /// Same pixel expressed in RGB. Values are not clamped.
    pub fn to_rgb(&self) -> Pixel {
        match self.color_space {
            ColorSpace::Rgb => *self,
            ColorSpace::YCbCr => {
                let [y, cb, cr] = self.components;
                let cb = cb - CHROMA_OFFSET;
                let cr = cr - CHROMA_OFFSET;

                Pixel::rgb(
                    y + 1.402 * cr,
                    y - 0.344136 * cb - 0.714136 * cr,
                    y + 1.772 * cb,
                )
            }
        }
    }

    /// Same pixel expressed in YCbCr. Values are not clamped.
    pub fn to_ycbcr(&self) -> Pixel {
        match self.color_space {
            ColorSpace::YCbCr => *self,
            ColorSpace::Rgb => {
                let [r, g, b] = self.components;

                Pixel::ycbcr(
                    0.299 * r + 0.587 * g + 0.114 * b,
                    -0.168736 * r - 0.331264 * g + 0.5 * b + CHROMA_OFFSET,
                    0.5 * r - 0.418688 * g - 0.081312 * b + CHROMA_OFFSET,
                )
            }
        }
    }

    pub fn to_color_space(&self, color_space: ColorSpace) -> Pixel {
        match color_space {
            ColorSpace::Rgb => self.to_rgb(),
            ColorSpace::YCbCr => self.to_ycbcr(),
        }
    }
}
