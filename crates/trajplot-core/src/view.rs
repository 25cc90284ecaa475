// File: crates/trajplot-core/src/view.rs
// First-class view state: visible ranges and helpers for pan/zoom/autoscale/equal aspect.

use crate::Chart;
use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ViewState {
    /// Data extents of all series plus a `margin` fraction of each span.
    pub fn from_chart(chart: &Chart, margin: f64) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for s in &chart.series {
            if let Some((x0, x1, y0, y1)) = s.finite_bounds() {
                x_min = x_min.min(x0);
                x_max = x_max.max(x1);
                y_min = y_min.min(y0);
                y_max = y_max.max(y1);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 };
        }
        if (x_max - x_min).abs() < 1e-9 { x_min -= 0.5; x_max += 0.5; }
        if (y_max - y_min).abs() < 1e-9 { y_min -= 0.5; y_max += 0.5; }
        let xm = (x_max - x_min) * margin;
        let ym = (y_max - y_min) * margin;
        Self { x_min: x_min - xm, x_max: x_max + xm, y_min: y_min - ym, y_max: y_max + ym }
    }

    pub fn apply_to_chart(&self, chart: &mut Chart) {
        chart.x_axis.min = self.x_min;
        chart.x_axis.max = self.x_max;
        chart.y_axis.min = self.y_min;
        chart.y_axis.max = self.y_max;
    }

    pub fn of_chart(chart: &Chart) -> Self {
        Self { x_min: chart.x_axis.min, x_max: chart.x_axis.max, y_min: chart.y_axis.min, y_max: chart.y_axis.max }
    }

    /// Widen the narrower range about its center so one data unit spans the same
    /// number of pixels on both axes of a `plot_w` x `plot_h` area.
    pub fn equalize_aspect(&mut self, plot_w: f64, plot_h: f64) {
        let plot_w = plot_w.max(1.0);
        let plot_h = plot_h.max(1.0);
        let x_span = self.x_max - self.x_min;
        let y_span = self.y_max - self.y_min;
        let ux = x_span / plot_w;
        let uy = y_span / plot_h;
        if ux > uy {
            let c = (self.y_min + self.y_max) * 0.5;
            let half = ux * plot_h * 0.5;
            self.y_min = c - half;
            self.y_max = c + half;
        } else if uy > ux {
            let c = (self.x_min + self.x_max) * 0.5;
            let half = uy * plot_w * 0.5;
            self.x_min = c - half;
            self.x_max = c + half;
        }
    }

    pub fn pan_by_pixels(&mut self, dx: f64, dy: f64, width: i32, height: i32, insets: &Insets) {
        let plot_w = ((width - insets.hsum() as i32) as f64).max(1.0);
        let plot_h = ((height - insets.vsum() as i32) as f64).max(1.0);
        let x_span = self.x_max - self.x_min;
        let y_span = self.y_max - self.y_min;
        let wx = -dx / plot_w * x_span;
        let wy = dy / plot_h * y_span;
        self.x_min += wx; self.x_max += wx;
        self.y_min += wy; self.y_max += wy;
    }

    /// Zoom about the cursor; positive `scroll` zooms in. The point under the cursor stays put.
    pub fn zoom_at_pixel(&mut self, scroll: f64, cursor_x: f64, cursor_y: f64, width: i32, height: i32, insets: &Insets) {
        let w = width as f64; let h = height as f64;
        let l = insets.left as f64; let rpx = (w - insets.right as f64).max(l + 1.0);
        let t = insets.top as f64; let bpx = (h - insets.bottom as f64).max(t + 1.0);
        let plot_w = rpx - l; let plot_h = bpx - t;
        let cx = cursor_x.clamp(l, rpx); let cy = cursor_y.clamp(t, bpx);
        let x_span = self.x_max - self.x_min; let y_span = self.y_max - self.y_min;
        let wx = self.x_min + (cx - l) / plot_w * x_span;
        let wy = self.y_max - (cy - t) / plot_h * y_span;
        let factor = (1.0 - scroll).clamp(0.1, 10.0);
        let nx = x_span * factor; let ny = y_span * factor;
        let rx = (wx - self.x_min) / x_span; let ry = (self.y_max - wy) / y_span;
        self.x_min = wx - rx * nx; self.x_max = self.x_min + nx;
        self.y_max = wy + ry * ny; self.y_min = self.y_max - ny;
    }
}
