//! Passthrough backends delegating to the `image` crate's resize primitive.
//!
//! These backends own no filtering logic. They guarantee only the contract
//! shared with the buffer resampler: exact output dimensions, an untouched
//! source, and an error rather than a panic when the host cannot service the
//! request.

use crate::error::ResizeError;
use crate::types::Size;
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbaImage};

pub(crate) fn redraw(
    image: &DynamicImage,
    target: Size,
    filter: FilterType,
) -> Result<RgbaImage, ResizeError> {
    let resized = imageops::resize(&image.to_rgba8(), target.w, target.h, filter);
    if resized.width() != target.w || resized.height() != target.h {
        return Err(ResizeError::Backend(format!(
            "host resize produced {}x{}, wanted {}x{}",
            resized.width(),
            resized.height(),
            target.w,
            target.h
        )));
    }
    Ok(resized)
}
