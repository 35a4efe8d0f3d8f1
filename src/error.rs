//! Failure modes shared by the dispatcher and the buffer resampler.

use std::fmt;

/// Why a resize request produced no output.
///
/// Every failure path yields no buffer at all, never a partial or wrong-sized
/// one. The dispatcher does not retry across strategies; a caller that wants a
/// fallback picks another [`ResizeStrategy`](crate::ResizeStrategy) and calls
/// again.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResizeError {
    /// Target width or height is zero.
    InvalidTarget { width: u32, height: u32 },
    /// Source stride is smaller than one packed row.
    StrideTooSmall { stride: usize, min: usize },
    /// Source data region is shorter than `stride * height`.
    DataTooShort { len: usize, min: usize },
    /// Source image cannot be converted to packed RGBA8.
    UnsupportedSource,
    /// Destination or scratch memory could not be allocated.
    Allocation { bytes: usize },
    /// A host passthrough primitive failed.
    Backend(String),
}

impl fmt::Display for ResizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResizeError::InvalidTarget { width, height } => {
                write!(f, "invalid target dimensions {width}x{height}")
            }
            ResizeError::StrideTooSmall { stride, min } => {
                write!(f, "row stride {stride} below packed row size {min}")
            }
            ResizeError::DataTooShort { len, min } => {
                write!(f, "pixel data holds {len} bytes, layout requires {min}")
            }
            ResizeError::UnsupportedSource => {
                write!(f, "source image cannot be converted to RGBA8")
            }
            ResizeError::Allocation { bytes } => {
                write!(f, "failed to allocate {bytes} bytes for resampling")
            }
            ResizeError::Backend(msg) => write!(f, "backend failure: {msg}"),
        }
    }
}

impl std::error::Error for ResizeError {}
