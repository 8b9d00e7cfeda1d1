//! Block processing over a pixel matrix
//!
//! A matrix whose sides are multiples of N is tiled into N×N blocks, one set
//! per color channel. Blocks are addressed in block coordinates and listed in
//! raster order. Every block is transformed independently, so channel passes
//! run on the rayon pool.

use crate::TransformEngine;
use blockdct_core::consts::NUM_COMPONENTS;
use blockdct_core::{Block, DctError, DctResult, PixelMatrix};
use rayon::prelude::*;

/// Tiling of a matrix into square blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockGrid {
    pub block_size: usize,
    /// Blocks per row
    pub blocks_x: usize,
    /// Blocks per column
    pub blocks_y: usize,
}

impl BlockGrid {
    pub fn new(width: usize, height: usize, block_size: usize) -> DctResult<Self> {
        if block_size == 0 {
            return Err(DctError::invalid_parameter("block size must be positive"));
        }
        if width % block_size != 0 || height % block_size != 0 {
            return Err(DctError::invalid_parameter(format!(
                "{}x{} is not tiled by {}x{} blocks",
                width, height, block_size, block_size
            )));
        }

        Ok(Self {
            block_size,
            blocks_x: width / block_size,
            blocks_y: height / block_size,
        })
    }

    /// Grid of `block_size` blocks over `matrix`, which must have been built for
    /// that block size
    pub fn for_matrix(matrix: &PixelMatrix, block_size: usize) -> DctResult<Self> {
        if matrix.block_size() != block_size {
            return Err(DctError::invalid_parameter(format!(
                "matrix was built for {}x{} blocks, not {}x{}",
                matrix.block_size(),
                matrix.block_size(),
                block_size,
                block_size
            )));
        }
        Self::new(matrix.width(), matrix.height(), block_size)
    }

    pub fn block_count(&self) -> usize {
        self.blocks_x * self.blocks_y
    }

    /// Block coordinates `(block_x, block_y)` of the `index`-th block in raster
    /// order, or `None` past the last block
    pub fn position(&self, index: usize) -> Option<(usize, usize)> {
        if index < self.block_count() {
            Some(self.raster_position(index))
        } else {
            None
        }
    }

    /// `index` must be below `block_count()`, which also rules out `blocks_x == 0`
    fn raster_position(&self, index: usize) -> (usize, usize) {
        (index % self.blocks_x, index / self.blocks_x)
    }

    fn check_position(&self, block_x: usize, block_y: usize) -> DctResult<()> {
        if block_x < self.blocks_x && block_y < self.blocks_y {
            Ok(())
        } else {
            Err(DctError::invalid_parameter(format!(
                "block ({}, {}) outside a {}x{} block grid",
                block_x, block_y, self.blocks_x, self.blocks_y
            )))
        }
    }
}

fn check_channel(channel: usize) -> DctResult<()> {
    if channel < NUM_COMPONENTS {
        Ok(())
    } else {
        Err(DctError::invalid_parameter(format!(
            "channel {} out of range (pixels have {})",
            channel, NUM_COMPONENTS
        )))
    }
}

fn read_block(
    matrix: &PixelMatrix,
    channel: usize,
    block_x: usize,
    block_y: usize,
    block_size: usize,
) -> Block {
    let (top, left) = (block_y * block_size, block_x * block_size);
    Block::from_fn(block_size, block_size, |y, x| {
        matrix[(top + y, left + x)].component(channel)
    })
}

fn write_block(
    matrix: &mut PixelMatrix,
    channel: usize,
    block_x: usize,
    block_y: usize,
    block: &Block,
) {
    let block_size = block.height();
    let (top, left) = (block_y * block_size, block_x * block_size);
    for (y, samples) in block.rows().enumerate() {
        let row = &mut matrix.row_mut(top + y)[left..left + block_size];
        for (pixel, &sample) in row.iter_mut().zip(samples) {
            pixel.set_component(channel, sample);
        }
    }
}

/// Copy one channel of an N×N block out of the matrix
pub fn extract_block(
    matrix: &PixelMatrix,
    channel: usize,
    block_x: usize,
    block_y: usize,
    block_size: usize,
) -> DctResult<Block> {
    check_channel(channel)?;
    BlockGrid::for_matrix(matrix, block_size)?.check_position(block_x, block_y)?;
    Ok(read_block(matrix, channel, block_x, block_y, block_size))
}

/// Write a square block of samples into one channel of the matrix
pub fn store_block(
    matrix: &mut PixelMatrix,
    channel: usize,
    block_x: usize,
    block_y: usize,
    block: &Block,
) -> DctResult<()> {
    let block_size = block.height();
    if !block.is_square(block_size) {
        return Err(DctError::dimension_mismatch(
            block_size,
            block.width(),
            block.height(),
        ));
    }

    check_channel(channel)?;
    BlockGrid::for_matrix(matrix, block_size)?.check_position(block_x, block_y)?;
    write_block(matrix, channel, block_x, block_y, block);
    Ok(())
}

/// Forward-transform every block of `channel`, in raster order
pub fn forward_channel(
    engine: &TransformEngine,
    matrix: &PixelMatrix,
    channel: usize,
) -> DctResult<Vec<Block>> {
    check_channel(channel)?;
    let grid = BlockGrid::for_matrix(matrix, engine.block_size())?;

    (0..grid.block_count())
        .into_par_iter()
        .map(|index| {
            let (block_x, block_y) = grid.raster_position(index);
            engine.forward(&read_block(matrix, channel, block_x, block_y, grid.block_size))
        })
        .collect()
}

/// Inverse-transform raster-ordered coefficient blocks back into `channel`
pub fn inverse_channel(
    engine: &TransformEngine,
    matrix: &mut PixelMatrix,
    channel: usize,
    coefficients: &[Block],
) -> DctResult<()> {
    check_channel(channel)?;
    let grid = BlockGrid::for_matrix(matrix, engine.block_size())?;
    if coefficients.len() != grid.block_count() {
        return Err(DctError::invalid_parameter(format!(
            "expected {} coefficient blocks, got {}",
            grid.block_count(),
            coefficients.len()
        )));
    }

    let samples = coefficients
        .par_iter()
        .map(|block| engine.inverse(block))
        .collect::<DctResult<Vec<_>>>()?;

    for (index, block) in samples.iter().enumerate() {
        let (block_x, block_y) = grid.raster_position(index);
        write_block(matrix, channel, block_x, block_y, block);
    }

    Ok(())
}

/// Forward-transform `channel`, apply `op` to every coefficient block, and
/// write the reconstruction back
pub fn process_channel<F>(
    engine: &TransformEngine,
    matrix: &mut PixelMatrix,
    channel: usize,
    op: F,
) -> DctResult<()>
where
    F: Fn(&mut Block) + Sync,
{
    let mut coefficients = forward_channel(engine, matrix, channel)?;
    coefficients.par_iter_mut().for_each(|block| op(block));
    inverse_channel(engine, matrix, channel, &coefficients)
}
