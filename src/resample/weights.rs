//! Per-axis resampling weight tables.
//!
//! Each destination index maps to a continuous source coordinate via
//! `src = (dst + 0.5) * ratio - 0.5` where `ratio = src_len / dst_len`.
//! When an axis shrinks (`ratio >= 1`) the weights are the overlap fractions
//! of the destination pixel's source footprint with each source cell; when it
//! grows they are normalized Lanczos-3 taps. Taps that fall outside the image
//! fold into the nearest edge sample, replicating the border.

use super::kernel::{lanczos3, LANCZOS_SUPPORT};
use log::debug;

/// Contribution of consecutive source samples to one destination index.
#[derive(Clone, Debug)]
pub struct WeightLine {
    /// First contributing source index.
    pub start: usize,
    /// Normalized weights for source indices `start..start + weights.len()`.
    pub weights: Vec<f32>,
}

/// Weight table covering every destination index along one axis.
#[derive(Clone, Debug)]
pub struct AxisWeights {
    pub lines: Vec<WeightLine>,
}

impl AxisWeights {
    /// Compute the table mapping `src_len` source samples onto `dst_len`
    /// destination samples. Both lengths must be nonzero.
    pub fn compute(src_len: usize, dst_len: usize) -> Self {
        assert!(src_len > 0 && dst_len > 0, "axis extents must be positive");
        let ratio = src_len as f64 / dst_len as f64;
        let lines: Vec<WeightLine> = if ratio >= 1.0 {
            (0..dst_len).map(|i| area_line(i, ratio, src_len)).collect()
        } else {
            (0..dst_len)
                .map(|i| lanczos_line(i, ratio, src_len))
                .collect()
        };
        debug!(
            "resample: axis table {src_len} -> {dst_len} ({})",
            if ratio >= 1.0 { "area" } else { "lanczos3" }
        );
        Self { lines }
    }
}

/// Overlap of the destination pixel's footprint `[center - ratio/2,
/// center + ratio/2]` with each source cell `[i - 0.5, i + 0.5]`.
fn area_line(dst: usize, ratio: f64, src_len: usize) -> WeightLine {
    let center = (dst as f64 + 0.5) * ratio - 0.5;
    let left = center - 0.5 * ratio;
    let right = center + 0.5 * ratio;
    let first = (left + 0.5).floor() as isize;
    let last = (right + 0.5).ceil() as isize - 1;
    let raw: Vec<f64> = (first..=last)
        .map(|i| {
            let cell_lo = i as f64 - 0.5;
            let cell_hi = i as f64 + 0.5;
            (right.min(cell_hi) - left.max(cell_lo)).max(0.0)
        })
        .collect();
    fold_line(first, &raw, src_len)
}

/// Lanczos-3 taps at the integer samples within the support window.
fn lanczos_line(dst: usize, ratio: f64, src_len: usize) -> WeightLine {
    let center = (dst as f64 + 0.5) * ratio - 0.5;
    let support = LANCZOS_SUPPORT as f64;
    let first = (center - support).ceil() as isize;
    let last = (center + support).floor() as isize;
    let raw: Vec<f64> = (first..=last)
        .map(|i| lanczos3((i as f64 - center) as f32) as f64)
        .collect();
    fold_line(first, &raw, src_len)
}

/// Clamp tap indices into `[0, src_len)`, merging out-of-range taps into the
/// edge sample, and normalize the line to sum 1.
fn fold_line(first: isize, raw: &[f64], src_len: usize) -> WeightLine {
    let max = src_len as isize - 1;
    let start = first.clamp(0, max) as usize;
    let end = (first + raw.len() as isize - 1).clamp(0, max) as usize;
    let mut weights = vec![0.0f64; end - start + 1];
    for (k, &w) in raw.iter().enumerate() {
        let idx = (first + k as isize).clamp(0, max) as usize;
        weights[idx - start] += w;
    }
    let sum: f64 = weights.iter().sum();
    let inv = 1.0 / sum;
    WeightLine {
        start,
        weights: weights.iter().map(|&w| (w * inv) as f32).collect(),
    }
}
