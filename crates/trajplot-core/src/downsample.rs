// File: crates/trajplot-core/src/downsample.rs
// Summary: Fixed-stride downsampling used to cap the point count of secondary charts.

use std::borrow::Cow;

/// Step between kept rows when reducing `n` rows to roughly `max_points`.
/// Always at least 1; `max_points == 0` means no cap.
pub fn sampling_stride(n: usize, max_points: usize) -> usize {
    if max_points == 0 {
        return 1;
    }
    (n / max_points).max(1)
}

/// Keep every `stride`-th item starting at index 0.
/// Returns the input untouched when `n <= max_points` (or `max_points == 0`).
///
/// The result has `ceil(n / stride)` items and preserves input order.
pub fn downsample<T: Clone>(rows: &[T], max_points: usize) -> Cow<'_, [T]> {
    let n = rows.len();
    if max_points == 0 || n <= max_points {
        return Cow::Borrowed(rows);
    }
    let stride = sampling_stride(n, max_points);
    log::info!("Downsampling secondary data: keeping 1 of every {} rows", stride);
    Cow::Owned(rows.iter().step_by(stride).cloned().collect())
}

/// Source indices kept by [`downsample`] for a table of `n` rows.
pub fn kept_indices(n: usize, max_points: usize) -> Vec<usize> {
    if max_points == 0 || n <= max_points {
        return (0..n).collect();
    }
    (0..n).step_by(sampling_stride(n, max_points)).collect()
}
