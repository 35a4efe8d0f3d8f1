pub mod io;
pub mod owned;
pub mod traits;
pub mod view;

pub use self::owned::PixelBuffer;
pub use self::traits::{BufferView, BufferViewMut, Rows, RowsMut, BYTES_PER_PIXEL};
pub use self::view::PixelView;

use crate::error::ResizeError;

/// Validate the packed-RGBA layout invariant shared by owned buffers and views.
pub(crate) fn check_layout(
    w: usize,
    h: usize,
    stride_bytes: usize,
    data_len: usize,
) -> Result<(), ResizeError> {
    let min_stride = w * BYTES_PER_PIXEL;
    if stride_bytes < min_stride {
        return Err(ResizeError::StrideTooSmall {
            stride: stride_bytes,
            min: min_stride,
        });
    }
    let min_len = stride_bytes * h;
    if data_len < min_len {
        return Err(ResizeError::DataTooShort {
            len: data_len,
            min: min_len,
        });
    }
    Ok(())
}
