//! I/O helpers for RGBA buffers and JSON reports.
//!
//! - `load_rgba_image`: read a PNG/JPEG/etc. into a packed RGBA buffer.
//! - `save_rgba_image`: write a `PixelBuffer` to a PNG.
//! - `buffer_from_dynamic` / `rgba_from_buffer`: bridge to the `image` crate
//!   types used at the dispatcher seam.
//! - `write_json_file`: pretty-print a serializable value to disk.

use super::{BufferView, BufferViewMut, PixelBuffer, BYTES_PER_PIXEL};
use crate::error::ResizeError;
use image::{DynamicImage, RgbaImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Convert a decoded image into a tightly packed RGBA buffer.
pub fn buffer_from_dynamic(img: &DynamicImage) -> Result<PixelBuffer, ResizeError> {
    buffer_from_rgba(&img.to_rgba8())
}

/// Copy an `RgbaImage` into a tightly packed [`PixelBuffer`].
pub fn buffer_from_rgba(img: &RgbaImage) -> Result<PixelBuffer, ResizeError> {
    let (w, h) = (img.width() as usize, img.height() as usize);
    let mut out = PixelBuffer::new_zeroed(w, h)?;
    let row_bytes = w * BYTES_PER_PIXEL;
    if row_bytes > 0 {
        for (dst_row, src_row) in out.rows_mut().zip(img.as_raw().chunks_exact(row_bytes)) {
            dst_row.copy_from_slice(src_row);
        }
    }
    Ok(out)
}

/// Rebuild an `RgbaImage` from a buffer, dropping any row padding.
pub fn rgba_from_buffer(buf: &PixelBuffer) -> Result<RgbaImage, ResizeError> {
    let data = match buf.as_slice() {
        Some(slice) => slice.to_vec(),
        None => {
            let mut packed = Vec::new();
            packed
                .try_reserve_exact(buf.w * buf.h * BYTES_PER_PIXEL)
                .map_err(|_| ResizeError::Allocation {
                    bytes: buf.w * buf.h * BYTES_PER_PIXEL,
                })?;
            for row in buf.as_view().rows() {
                packed.extend_from_slice(row);
            }
            packed
        }
    };
    RgbaImage::from_raw(buf.w as u32, buf.h as u32, data)
        .ok_or_else(|| ResizeError::Backend("RGBA container rebuild failed".to_string()))
}

/// Load an image from disk and convert to packed RGBA8.
pub fn load_rgba_image(path: &Path) -> Result<PixelBuffer, String> {
    let img = image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    buffer_from_dynamic(&img).map_err(|e| format!("Failed to convert {}: {e}", path.display()))
}

/// Save an RGBA buffer to a PNG, creating parent directories.
pub fn save_rgba_image(buf: &PixelBuffer, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let img =
        rgba_from_buffer(buf).map_err(|e| format!("Failed to pack {}: {e}", path.display()))?;
    img.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
