//! Strategy selection and request routing.
//!
//! [`resize`] invokes exactly one backend for a request and returns its result
//! unchanged: no retries and no fallback between strategies. A caller that
//! wants a fallback picks another strategy and calls again.

pub mod imageops;

use crate::buffer::io::{buffer_from_dynamic, rgba_from_buffer};
use crate::error::ResizeError;
use crate::resample::resample;
use crate::types::Size;
use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use log::debug;
use serde::Deserialize;

/// Closed set of interchangeable resize backends.
///
/// [`Resampler`](ResizeStrategy::Resampler) is the crate's own area/Lanczos
/// resampler and the default. The passthrough variants delegate to the
/// `image` crate's resize primitive; their filtering quality is whatever the
/// host produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResizeStrategy {
    /// Area/Lanczos resampler over a packed RGBA buffer.
    #[default]
    Resampler,
    /// Host nearest-neighbour redraw.
    NearestPassthrough,
    /// Host bilinear redraw.
    BilinearPassthrough,
    /// Host Lanczos filter invocation.
    LanczosPassthrough,
}

/// Resize `image` to exactly `target` pixels using `strategy`.
pub fn resize(
    image: &DynamicImage,
    target: Size,
    strategy: ResizeStrategy,
) -> Result<RgbaImage, ResizeError> {
    if !target.is_valid() {
        return Err(ResizeError::InvalidTarget {
            width: target.w,
            height: target.h,
        });
    }
    debug!(
        "resize: {}x{} -> {}x{} via {:?}",
        image.width(),
        image.height(),
        target.w,
        target.h,
        strategy
    );
    match strategy {
        ResizeStrategy::Resampler => {
            let src = buffer_from_dynamic(image)?;
            let out = resample(src.as_view(), target.w, target.h)?;
            rgba_from_buffer(&out)
        }
        ResizeStrategy::NearestPassthrough => {
            imageops::redraw(image, target, FilterType::Nearest)
        }
        ResizeStrategy::BilinearPassthrough => {
            imageops::redraw(image, target, FilterType::Triangle)
        }
        ResizeStrategy::LanczosPassthrough => {
            imageops::redraw(image, target, FilterType::Lanczos3)
        }
    }
}

/// [`resize`] with the default strategy.
pub fn resize_default(image: &DynamicImage, target: Size) -> Result<RgbaImage, ResizeError> {
    resize(image, target, ResizeStrategy::default())
}
