// File: crates/trajplot-core/src/series.rs
// Summary: Line series model: labelled (x, y) points, NaN marks a gap.

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub data_xy: Vec<(f64, f64)>,
}

impl Series {
    pub fn with_data(label: impl Into<String>, data: Vec<(f64, f64)>) -> Self {
        Self { label: label.into(), data_xy: data }
    }

    /// Pair two equally long columns; extra values on the longer side are ignored.
    pub fn from_columns(label: impl Into<String>, xs: &[f64], ys: &[f64]) -> Self {
        let data = xs.iter().copied().zip(ys.iter().copied()).collect();
        Self { label: label.into(), data_xy: data }
    }

    pub fn len(&self) -> usize { self.data_xy.len() }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// `(x_min, x_max, y_min, y_max)` over points where both coordinates are finite.
    pub fn finite_bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let mut b: Option<(f64, f64, f64, f64)> = None;
        for &(x, y) in &self.data_xy {
            if !x.is_finite() || !y.is_finite() { continue; }
            b = Some(match b {
                None => (x, x, y, y),
                Some((x0, x1, y0, y1)) => (x0.min(x), x1.max(x), y0.min(y), y1.max(y)),
            });
        }
        b
    }

    /// Runs of consecutive finite points; a NaN or infinite coordinate splits the line.
    pub fn segments(&self) -> Vec<&[(f64, f64)]> {
        self.data_xy
            .split(|&(x, y)| !x.is_finite() || !y.is_finite())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
