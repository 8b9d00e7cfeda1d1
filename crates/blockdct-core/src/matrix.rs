//! Pixel matrix
//!
//! Bridges a packed 3-bytes-per-pixel buffer and a 2-D array of `Pixel`s
//! suitable for block transforms. Construction from a raw buffer crops both
//! dimensions down to a multiple of the block size: partial edge blocks are
//! dropped, not padded.

use crate::consts::{BYTES_PER_PIXEL, DEFAULT_BLOCK_SIZE};
use crate::surface::{LockMode, Surface, SurfaceLock};
use crate::{clamped_byte, ChannelOrder, ColorSpace, DctError, DctResult, Dimensions, Pixel};
use log::{debug, warn};
use rayon::prelude::*;
use std::ops::{Index, IndexMut};

/// How a raw buffer is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferOptions {
    /// Dimensions are cropped to a multiple of this
    pub block_size: usize,
    /// Byte order of each packed pixel, used for reading and writing back
    pub channel_order: ChannelOrder,
}

impl Default for BufferOptions {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            channel_order: ChannelOrder::default(),
        }
    }
}

impl BufferOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn channel_order(mut self, channel_order: ChannelOrder) -> Self {
        self.channel_order = channel_order;
        self
    }
}

/// Row-major matrix of pixels, `height` rows by `width` columns
#[derive(Debug, Clone, PartialEq)]
pub struct PixelMatrix {
    dimensions: Dimensions,
    block_size: usize,
    channel_order: ChannelOrder,
    pixels: Vec<Pixel>,
}

impl PixelMatrix {
    /// Zero-filled RGB matrix of the given shape. No cropping is applied.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            dimensions: Dimensions::new(width, height),
            block_size: DEFAULT_BLOCK_SIZE,
            channel_order: ChannelOrder::default(),
            pixels: vec![Pixel::default(); width * height],
        }
    }

    /// Zero-filled RGB matrix for `block_size` passes. No cropping is applied.
    pub fn with_block_size(height: usize, width: usize, block_size: usize) -> DctResult<Self> {
        if block_size == 0 {
            return Err(DctError::invalid_parameter("block size must be positive"));
        }
        Ok(Self {
            block_size,
            ..Self::new(height, width)
        })
    }

    /// Read a packed buffer with the default block size
    pub fn from_buffer(
        buffer: &[u8],
        raw_width: usize,
        raw_height: usize,
        stride: usize,
        channel_order: ChannelOrder,
    ) -> DctResult<Self> {
        let options = BufferOptions::new().channel_order(channel_order);
        Self::from_buffer_with(buffer, raw_width, raw_height, stride, &options)
    }

    /// Read a packed buffer.
    ///
    /// Row `y` starts at byte `y * stride`; only the first `3 * width` bytes
    /// of each row are read, so alignment padding is skipped.
    pub fn from_buffer_with(
        buffer: &[u8],
        raw_width: usize,
        raw_height: usize,
        stride: usize,
        options: &BufferOptions,
    ) -> DctResult<Self> {
        if options.block_size == 0 {
            return Err(DctError::invalid_parameter("block size must be positive"));
        }

        let raw = Dimensions::new(raw_width, raw_height);
        let dimensions = raw.cropped_to(options.block_size);
        if dimensions != raw {
            debug!(
                "cropping {}x{} to {}x{} for {}x{} blocks",
                raw.width,
                raw.height,
                dimensions.width,
                dimensions.height,
                options.block_size,
                options.block_size
            );
        }
        if dimensions.is_empty() {
            warn!(
                "{}x{} image is smaller than one {}x{} block",
                raw.width, raw.height, options.block_size, options.block_size
            );
        }

        let row_bytes = check_layout(buffer.len(), dimensions, stride)?;
        let pixel_count = dimensions
            .checked_pixel_count()
            .ok_or_else(|| DctError::invalid_parameter("pixel count overflows usize"))?;

        let mut pixels = vec![Pixel::default(); pixel_count];
        if !dimensions.is_empty() {
            let offsets = options.channel_order.offsets();

            pixels
                .par_chunks_mut(dimensions.width)
                .enumerate()
                .for_each(|(y, row)| {
                    let start = y * stride;
                    let line = &buffer[start..start + row_bytes];
                    for (pixel, bytes) in row.iter_mut().zip(line.chunks_exact(BYTES_PER_PIXEL)) {
                        *pixel = Pixel::rgb(
                            bytes[offsets[0]] as f64,
                            bytes[offsets[1]] as f64,
                            bytes[offsets[2]] as f64,
                        );
                    }
                });
        }

        Ok(Self {
            dimensions,
            block_size: options.block_size,
            channel_order: options.channel_order,
            pixels,
        })
    }

    /// Lock `surface` read-only and copy it into a new matrix.
    ///
    /// The surface is unlocked before returning, on success and on failure.
    pub fn from_surface<S: Surface + ?Sized>(
        surface: &mut S,
        options: &BufferOptions,
    ) -> DctResult<Self> {
        let guard = SurfaceLock::acquire(surface, LockMode::ReadOnly)?;
        Self::from_buffer_with(
            guard.data(),
            guard.width(),
            guard.height(),
            guard.stride(),
            options,
        )
    }

    /// Materialize as a tightly packed buffer (stride `3 * width`).
    ///
    /// Components are written in the channel order the matrix was read with and
    /// clamped into `[0, 255]`. Non-RGB pixels are converted to RGB first.
    pub fn to_buffer(&self) -> Vec<u8> {
        let row_bytes = self.dimensions.width * BYTES_PER_PIXEL;
        let mut buffer = vec![0u8; row_bytes * self.dimensions.height];
        if self.dimensions.is_empty() {
            return buffer;
        }

        let offsets = self.channel_order.offsets();
        buffer
            .par_chunks_mut(row_bytes)
            .zip(self.pixels.par_chunks(self.dimensions.width))
            .for_each(|(line, row)| write_row(line, row, offsets));

        buffer
    }

    /// Lock `surface` write-only and copy the matrix into its top-left corner.
    ///
    /// The surface must be at least as large as the matrix.
    pub fn write_to_surface<S: Surface + ?Sized>(&self, surface: &mut S) -> DctResult<()> {
        let mut guard = SurfaceLock::acquire(surface, LockMode::WriteOnly)?;
        if guard.width() < self.width() || guard.height() < self.height() {
            return Err(DctError::invalid_parameter(format!(
                "{}x{} surface cannot hold a {}x{} matrix",
                guard.width(),
                guard.height(),
                self.width(),
                self.height()
            )));
        }

        let stride = guard.stride();
        let row_bytes = check_layout(guard.data().len(), self.dimensions, stride)?;
        if self.dimensions.is_empty() {
            return Ok(());
        }

        let offsets = self.channel_order.offsets();
        guard
            .data_mut()?
            .par_chunks_mut(stride)
            .zip(self.pixels.par_chunks(self.dimensions.width))
            .for_each(|(line, row)| write_row(&mut line[..row_bytes], row, offsets));

        Ok(())
    }

    /// Convert every pixel to `color_space` in place
    pub fn convert_color_space(&mut self, color_space: ColorSpace) {
        self.pixels
            .par_iter_mut()
            .for_each(|pixel| *pixel = pixel.to_color_space(color_space));
    }

    pub fn width(&self) -> usize {
        self.dimensions.width
    }

    pub fn height(&self) -> usize {
        self.dimensions.height
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn channel_order(&self) -> ChannelOrder {
        self.channel_order
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Pixel> {
        if row < self.height() && col < self.width() {
            Some(&self.pixels[row * self.width() + col])
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Pixel> {
        if row < self.height() && col < self.width() {
            let width = self.width();
            Some(&mut self.pixels[row * width + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[Pixel] {
        let width = self.width();
        &self.pixels[row * width..(row + 1) * width]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [Pixel] {
        let width = self.width();
        &mut self.pixels[row * width..(row + 1) * width]
    }

    /// All pixels, row-major
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }
}

impl Index<(usize, usize)> for PixelMatrix {
    type Output = Pixel;

    fn index(&self, (row, col): (usize, usize)) -> &Pixel {
        assert!(col < self.width(), "column {} out of range for width {}", col, self.width());
        &self.pixels[row * self.width() + col]
    }
}

impl IndexMut<(usize, usize)> for PixelMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Pixel {
        let width = self.width();
        assert!(col < width, "column {} out of range for width {}", col, width);
        &mut self.pixels[row * width + col]
    }
}

/// Check that `len` bytes hold `dimensions.height` rows of `stride` bytes,
/// the last of which only needs the pixel bytes. Returns the pixel bytes per row.
fn check_layout(len: usize, dimensions: Dimensions, stride: usize) -> DctResult<usize> {
    let overflow = || DctError::invalid_parameter("buffer layout overflows usize");

    let row_bytes = dimensions
        .width
        .checked_mul(BYTES_PER_PIXEL)
        .ok_or_else(overflow)?;
    if dimensions.is_empty() {
        return Ok(row_bytes);
    }

    if stride < row_bytes {
        return Err(DctError::invalid_parameter(format!(
            "stride {} is shorter than a {}-pixel row ({} bytes)",
            stride, dimensions.width, row_bytes
        )));
    }

    let required = (dimensions.height - 1)
        .checked_mul(stride)
        .and_then(|bytes| bytes.checked_add(row_bytes))
        .ok_or_else(overflow)?;
    if len < required {
        return Err(DctError::invalid_parameter(format!(
            "buffer too small: {}x{} pixels with stride {} need {} bytes, got {}",
            dimensions.width, dimensions.height, stride, required, len
        )));
    }

    Ok(row_bytes)
}

fn write_row(line: &mut [u8], row: &[Pixel], offsets: [usize; 3]) {
    for (bytes, pixel) in line.chunks_exact_mut(BYTES_PER_PIXEL).zip(row) {
        let rgb = pixel.to_rgb();
        for (component, &offset) in rgb.components.iter().zip(offsets.iter()) {
            bytes[offset] = clamped_byte(*component);
        }
    }
}
