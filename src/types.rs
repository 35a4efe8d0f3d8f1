//! Small shared types used across the crate.

use serde::{Deserialize, Serialize};

/// Target dimensions of a resize request, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    /// Width in pixels
    pub w: u32,
    /// Height in pixels
    pub h: u32,
}

impl Size {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// True when both dimensions are nonzero.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.w > 0 && self.h > 0
    }
}
