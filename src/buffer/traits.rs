//! Row-oriented access to packed RGBA pixel storage.

/// Fixed pixel layout: one byte each for red, green, blue, alpha.
pub const BYTES_PER_PIXEL: usize = 4;

pub trait BufferView {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// Bytes between the starts of consecutive rows. May exceed `width * 4`.
    fn stride_bytes(&self) -> usize;

    /// One row of `width * 4` bytes, stride padding excluded.
    fn row(&self, y: usize) -> &[u8];

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { buffer: self, y: 0 }
    }

    fn is_contiguous(&self) -> bool {
        self.stride_bytes() == self.width() * BYTES_PER_PIXEL
    }

    fn as_slice(&self) -> Option<&[u8]> {
        None
    }
}

pub trait BufferViewMut: BufferView {
    fn row_mut(&mut self, y: usize) -> &mut [u8];

    fn rows_mut(&mut self) -> RowsMut<'_, Self>
    where
        Self: Sized,
    {
        RowsMut { buffer: self, y: 0 }
    }
}

pub struct Rows<'a, B: ?Sized + BufferView> {
    buffer: &'a B,
    y: usize,
}

impl<'a, B: BufferView> Iterator for Rows<'a, B> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.buffer.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.buffer.row(y))
    }
}

pub struct RowsMut<'a, B: ?Sized + BufferViewMut> {
    buffer: &'a mut B,
    y: usize,
}

impl<'a, B: BufferViewMut> Iterator for RowsMut<'a, B> {
    type Item = &'a mut [u8];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.buffer.height() {
            return None;
        }
        // Reborrow trick to obtain a new &mut for each row
        let y = self.y;
        self.y += 1;
        let ptr = self.buffer as *mut B;
        // SAFETY: Each row y is returned at most once and rows do not alias.
        Some(unsafe { (&mut *ptr).row_mut(y) })
    }
}
