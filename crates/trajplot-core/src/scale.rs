// File: crates/trajplot-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for the X and Y axes.

use crate::axis::Axis;
use crate::geometry::RectI32;

/// Maps the value range `[vmin, vmax]` onto the pixel range `[px_start, px_end]`.
/// For a Y axis `px_start` is the bottom edge, so larger values go up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub px_start: f32,
    pub px_end: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl LinearScale {
    pub fn new(px_start: f32, px_end: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { px_start, px_end, vmin, vmax };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    /// Horizontal scale for `axis` across the plot rect.
    pub fn horizontal(rect: &RectI32, axis: &Axis) -> Self {
        Self::new(rect.left as f32, rect.right as f32, axis.min, axis.max)
    }

    /// Vertical scale for `axis` across the plot rect (bottom = min).
    pub fn vertical(rect: &RectI32, axis: &Axis) -> Self {
        Self::new(rect.bottom as f32, rect.top as f32, axis.min, axis.max)
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = self.vmax - self.vmin;
        self.px_start + ((v - self.vmin) / span) as f32 * (self.px_end - self.px_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_scale_grows_upward() {
        let s = LinearScale::new(300.0, 100.0, 0.0, 10.0);
        assert_eq!(s.to_px(0.0), 300.0);
        assert_eq!(s.to_px(10.0), 100.0);
        assert_eq!(s.to_px(5.0), 200.0);
    }

    #[test]
    fn flat_range_is_widened() {
        let s = LinearScale::new(0.0, 100.0, 3.0, 3.0);
        assert_eq!(s.vmax, 4.0);
        assert!(s.to_px(3.5).is_finite());
    }
}
