//! Filter kernels for the upscale path.

/// Support radius of the windowed-sinc upscale kernel.
pub const LANCZOS_SUPPORT: f32 = 3.0;

/// Normalized sinc, `sin(πx) / (πx)`.
#[inline]
pub fn sinc(x: f32) -> f32 {
    if x == 0.0 {
        1.0
    } else {
        let a = x * std::f32::consts::PI;
        a.sin() / a
    }
}

/// Sinc windowed by a wider sinc, zero outside `|x| < taps`.
#[inline]
pub fn lanczos(taps: f32, x: f32) -> f32 {
    if x.abs() < taps {
        sinc(x) * sinc(x / taps)
    } else {
        0.0
    }
}

/// Lanczos kernel with support radius 3.
#[inline]
pub fn lanczos3(x: f32) -> f32 {
    lanczos(LANCZOS_SUPPORT, x)
}
