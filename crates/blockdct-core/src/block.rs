//! Sample blocks
//!
//! A `Block` is a dense row-major matrix of `f64` samples. It is the unit the
//! transform engine consumes and produces, and doubles as the basis matrix
//! storage.

use crate::{DctError, DctResult};
use std::ops::{Index, IndexMut};

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    height: usize,
    width: usize,
    data: Vec<f64>,
}

impl Block {
    pub fn zeros(height: usize, width: usize) -> Self {
        Self::filled(height, width, 0.0)
    }

    pub fn filled(height: usize, width: usize, value: f64) -> Self {
        Self {
            height,
            width,
            data: vec![value; height * width],
        }
    }

    pub fn identity(size: usize) -> Self {
        let mut block = Self::zeros(size, size);
        for i in 0..size {
            block[(i, i)] = 1.0;
        }
        block
    }

    /// Build a block from row-major samples
    pub fn from_vec(height: usize, width: usize, data: Vec<f64>) -> DctResult<Self> {
        if data.len() != height * width {
            return Err(DctError::invalid_parameter(format!(
                "{} samples cannot form a {}x{} block",
                data.len(),
                width,
                height
            )));
        }
        Ok(Self {
            height,
            width,
            data,
        })
    }

    /// Build a block from nested rows. Ragged rows are rejected.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> DctResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().len());

        let mut data = Vec::with_capacity(height * width);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(DctError::invalid_parameter(format!(
                    "row {} has {} samples, expected {}",
                    y,
                    row.len(),
                    width
                )));
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            height,
            width,
            data,
        })
    }

    /// Build a block by evaluating `f(row, col)` for every cell
    pub fn from_fn(height: usize, width: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(height * width);
        for y in 0..height {
            for x in 0..width {
                data.push(f(y, x));
            }
        }
        Self {
            height,
            width,
            data,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_square(&self, size: usize) -> bool {
        self.height == size && self.width == size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.height && col < self.width {
            Some(self.data[row * self.width + col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.width..(row + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact(0) panics, an empty block has no rows anyway
        self.data.chunks_exact(self.width.max(1)).take(self.height)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    pub fn transposed(&self) -> Block {
        Block::from_fn(self.width, self.height, |y, x| self[(x, y)])
    }

    /// Largest absolute difference to `other`, or `None` when shapes differ
    pub fn max_abs_diff(&self, other: &Block) -> Option<f64> {
        if self.height != other.height || self.width != other.width {
            return None;
        }
        Some(
            self.data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| (a - b).abs())
                .fold(0.0, f64::max),
        )
    }
}

impl Index<(usize, usize)> for Block {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(col < self.width, "column {} out of range for width {}", col, self.width);
        &self.data[row * self.width + col]
    }
}

impl IndexMut<(usize, usize)> for Block {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(col < self.width, "column {} out of range for width {}", col, self.width);
        &mut self.data[row * self.width + col]
    }
}
