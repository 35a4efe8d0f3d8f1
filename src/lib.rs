#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod buffer;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod types;

// Core resampler — public for callers that already hold a pixel buffer.
pub mod resample;

// --- High-level re-exports -------------------------------------------------

pub use crate::buffer::{PixelBuffer, PixelView};
pub use crate::dispatch::{resize, resize_default, ResizeStrategy};
pub use crate::error::ResizeError;
pub use crate::resample::{resample, resample_with_timing, ResampleReport};
pub use crate::types::Size;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use pixel_rescale::prelude::*;
///
/// let rgba = vec![255u8; 8 * 8 * 4];
/// let view = PixelView::new(8, 8, 8 * 4, &rgba).unwrap();
/// let out = resample(view, 4, 4).unwrap();
/// assert_eq!((out.w, out.h), (4, 4));
/// ```
pub mod prelude {
    pub use crate::buffer::{BufferView, PixelBuffer, PixelView};
    pub use crate::{resample, resize, ResizeError, ResizeStrategy, Size};
}
