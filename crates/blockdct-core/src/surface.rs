//! Lockable pixel surfaces
//!
//! A surface is an externally owned pixel buffer (a bitmap, a mapped frame)
//! that must be locked before its bytes are touched and unlocked afterwards.
//! `SurfaceLock` pairs the two: the surface is released when the guard drops,
//! whether the copy finished, failed validation, or unwound.

use crate::{DctError, DctResult};

/// Access requested when locking a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockMode {
    ReadOnly,
    WriteOnly,
}

/// A packed 3-bytes-per-pixel buffer that requires scoped access
pub trait Surface {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// Bytes between the starts of two consecutive rows
    fn stride(&self) -> usize;

    fn lock(&mut self, mode: LockMode) -> DctResult<()>;
    fn unlock(&mut self);

    /// Raw bytes; only meaningful while locked
    fn data(&self) -> &[u8];
    fn data_mut(&mut self) -> &mut [u8];
}

/// Guard holding a surface lock until dropped
pub struct SurfaceLock<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    mode: LockMode,
}

impl<'a, S: Surface + ?Sized> SurfaceLock<'a, S> {
    pub fn acquire(surface: &'a mut S, mode: LockMode) -> DctResult<Self> {
        surface.lock(mode)?;
        Ok(Self { surface, mode })
    }

    pub fn mode(&self) -> LockMode {
        self.mode
    }

    pub fn width(&self) -> usize {
        self.surface.width()
    }

    pub fn height(&self) -> usize {
        self.surface.height()
    }

    pub fn stride(&self) -> usize {
        self.surface.stride()
    }

    pub fn data(&self) -> &[u8] {
        self.surface.data()
    }

    pub fn data_mut(&mut self) -> DctResult<&mut [u8]> {
        if self.mode != LockMode::WriteOnly {
            return Err(DctError::invalid_parameter(
                "surface is locked read-only",
            ));
        }
        Ok(self.surface.data_mut())
    }
}

impl<S: Surface + ?Sized> Drop for SurfaceLock<'_, S> {
    fn drop(&mut self) {
        self.surface.unlock();
    }
}

/// In-memory surface over an owned byte buffer
#[derive(Debug, Clone)]
pub struct RawSurface {
    data: Vec<u8>,
    width: usize,
    height: usize,
    stride: usize,
    lock: Option<LockMode>,
}

impl RawSurface {
    /// Wrap an existing buffer. The buffer is not validated here; readers check
    /// that it covers `height` rows of `stride` bytes.
    pub fn new(data: Vec<u8>, width: usize, height: usize, stride: usize) -> Self {
        Self {
            data,
            width,
            height,
            stride,
            lock: None,
        }
    }

    /// Zeroed surface with rows padded to `stride`
    pub fn with_stride(width: usize, height: usize, stride: usize) -> Self {
        Self::new(vec![0; stride * height], width, height, stride)
    }

    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl Surface for RawSurface {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn stride(&self) -> usize {
        self.stride
    }

    fn lock(&mut self, mode: LockMode) -> DctResult<()> {
        if let Some(held) = self.lock {
            return Err(DctError::invalid_parameter(format!(
                "surface already locked ({:?})",
                held
            )));
        }
        self.lock = Some(mode);
        Ok(())
    }

    fn unlock(&mut self) {
        self.lock = None;
    }

    fn data(&self) -> &[u8] {
        &self.data
    }

    fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}
