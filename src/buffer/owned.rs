//! Owned packed-RGBA pixel buffer.
//!
//! Channel order is RGBA with alpha last, 8 bits per channel. The stride is
//! expressed in bytes and may exceed `width * 4` when rows carry padding;
//! buffers produced by the resampler are always tightly packed.

use super::traits::{BufferView, BufferViewMut, BYTES_PER_PIXEL};
use super::view::PixelView;
use crate::error::ResizeError;

#[derive(Clone, Debug, Default)]
pub struct PixelBuffer {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Bytes between the starts of consecutive rows (`>= w * 4`)
    pub stride_bytes: usize,
    /// Backing storage in row-major order (`len >= stride_bytes * h`)
    pub data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a zero-initialized, tightly packed `w × h` buffer.
    ///
    /// Allocation failure is reported as [`ResizeError::Allocation`] instead
    /// of aborting the process; nothing is retained on that path.
    pub fn new_zeroed(w: usize, h: usize) -> Result<Self, ResizeError> {
        let stride = w
            .checked_mul(BYTES_PER_PIXEL)
            .ok_or(ResizeError::Allocation { bytes: usize::MAX })?;
        let bytes = stride
            .checked_mul(h)
            .ok_or(ResizeError::Allocation { bytes: usize::MAX })?;
        let mut data = Vec::new();
        data.try_reserve_exact(bytes)
            .map_err(|_| ResizeError::Allocation { bytes })?;
        data.resize(bytes, 0);
        Ok(Self {
            w,
            h,
            stride_bytes: stride,
            data,
        })
    }

    /// Wrap existing RGBA bytes, validating the layout invariant.
    pub fn from_vec(
        w: usize,
        h: usize,
        stride_bytes: usize,
        data: Vec<u8>,
    ) -> Result<Self, ResizeError> {
        super::check_layout(w, h, stride_bytes, data.len())?;
        Ok(Self {
            w,
            h,
            stride_bytes,
            data,
        })
    }

    /// Borrow as a read-only [`PixelView`].
    pub fn as_view(&self) -> PixelView<'_> {
        PixelView {
            w: self.w,
            h: self.h,
            stride_bytes: self.stride_bytes,
            data: &self.data,
        }
    }

    /// The RGBA pixel at (x, y).
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 4] {
        let o = y * self.stride_bytes + x * BYTES_PER_PIXEL;
        [
            self.data[o],
            self.data[o + 1],
            self.data[o + 2],
            self.data[o + 3],
        ]
    }
}

impl BufferView for PixelBuffer {
    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride_bytes(&self) -> usize {
        self.stride_bytes
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride_bytes;
        &self.data[start..start + self.w * BYTES_PER_PIXEL]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        self.is_contiguous()
            .then(|| &self.data[..self.w * self.h * BYTES_PER_PIXEL])
    }
}

impl BufferViewMut for PixelBuffer {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.stride_bytes;
        let end = start + self.w * BYTES_PER_PIXEL;
        &mut self.data[start..end]
    }
}
