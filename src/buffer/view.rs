//! Borrowed, read-only view over packed RGBA bytes.

use super::traits::{BufferView, BYTES_PER_PIXEL};
use crate::error::ResizeError;

#[derive(Clone, Copy, Debug)]
pub struct PixelView<'a> {
    pub w: usize,
    pub h: usize,
    /// Bytes between rows (`>= w * 4`)
    pub stride_bytes: usize,
    pub data: &'a [u8],
}

impl<'a> PixelView<'a> {
    /// Create a view over `data`, validating the layout invariant
    /// (`stride >= w * 4`, `data.len() >= stride * h`).
    pub fn new(
        w: usize,
        h: usize,
        stride_bytes: usize,
        data: &'a [u8],
    ) -> Result<Self, ResizeError> {
        super::check_layout(w, h, stride_bytes, data.len())?;
        Ok(Self {
            w,
            h,
            stride_bytes,
            data,
        })
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

impl BufferView for PixelView<'_> {
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
