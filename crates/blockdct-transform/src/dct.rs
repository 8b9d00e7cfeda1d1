//! DCT (Discrete Cosine Transform) engine
//!
//! Direct separable 2-D DCT-II over N×N blocks via two matrix products with a
//! precomputed orthonormal basis:
//!
//! - forward: `B · X · Bᵗ`
//! - inverse: `Bᵗ · C · B`
//!
//! where `B[i][j] = c(i) * cos(π/N * (j + 0.5) * i)`, `c(0) = sqrt(1/N)` and
//! `c(i) = sqrt(2/N)` otherwise. `B` is orthogonal, so the inverse reuses the
//! transpose instead of a separately computed inverse matrix.

use blockdct_core::consts::DEFAULT_BLOCK_SIZE;
use blockdct_core::{Block, DctError, DctResult};
use log::debug;
use std::f64::consts::PI;

/// Forward/inverse DCT over blocks of one fixed size.
///
/// Immutable after construction; share it freely across threads and images.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformEngine {
    block_size: usize,
    basis: Block,
    basis_t: Block,
}

impl TransformEngine {
    /// Precompute the basis for `block_size`×`block_size` blocks
    pub fn new(block_size: usize) -> DctResult<Self> {
        if block_size == 0 {
            return Err(DctError::invalid_parameter(
                "DCT block size must be positive",
            ));
        }

        debug!("building {}x{} DCT basis", block_size, block_size);
        Ok(Self::build(block_size))
    }

    fn build(block_size: usize) -> Self {
        let basis = dct_basis(block_size);
        let basis_t = basis.transposed();
        Self {
            block_size,
            basis,
            basis_t,
        }
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// The basis matrix `B`, one cosine basis function per row
    pub fn basis(&self) -> &Block {
        &self.basis
    }

    pub fn basis_transposed(&self) -> &Block {
        &self.basis_t
    }

    /// 2-D DCT-II of a sample block
    pub fn forward(&self, block: &Block) -> DctResult<Block> {
        self.check_shape(block)?;
        let left = matrix_multiply(&self.basis, block)?;
        matrix_multiply(&left, &self.basis_t)
    }

    /// 2-D DCT-III of a coefficient block
    pub fn inverse(&self, coefficients: &Block) -> DctResult<Block> {
        self.check_shape(coefficients)?;
        let left = matrix_multiply(&self.basis_t, coefficients)?;
        matrix_multiply(&left, &self.basis)
    }

    fn check_shape(&self, block: &Block) -> DctResult<()> {
        if block.is_square(self.block_size) {
            Ok(())
        } else {
            Err(DctError::dimension_mismatch(
                self.block_size,
                block.width(),
                block.height(),
            ))
        }
    }
}

impl Default for TransformEngine {
    fn default() -> Self {
        Self::build(DEFAULT_BLOCK_SIZE)
    }
}

/// Orthonormal DCT-II basis of size `n`
pub(crate) fn dct_basis(n: usize) -> Block {
    let size = n as f64;
    Block::from_fn(n, n, |i, j| {
        let ci = if i == 0 {
            (1.0 / size).sqrt()
        } else {
            (2.0 / size).sqrt()
        };
        ci * (PI / size * (j as f64 + 0.5) * i as f64).cos()
    })
}

/// `a · b`, accumulating over the shared index.
///
/// `b` must have as many rows as `a` has columns.
pub fn matrix_multiply(a: &Block, b: &Block) -> DctResult<Block> {
    if a.width() != b.height() {
        return Err(DctError::DimensionMismatch {
            expected_width: b.width(),
            expected_height: a.width(),
            actual_width: b.width(),
            actual_height: b.height(),
        });
    }

    let mut result = Block::zeros(a.height(), b.width());
    for i in 0..a.height() {
        for j in 0..b.width() {
            let mut sum = 0.0;
            for k in 0..a.width() {
                sum += a[(i, k)] * b[(k, j)];
            }
            result[(i, j)] = sum;
        }
    }
    Ok(result)
}
