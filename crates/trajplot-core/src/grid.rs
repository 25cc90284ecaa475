// File: crates/trajplot-core/src/grid.rs
// Summary: Grid/tick layout helpers and tick label formatting.

/// Round `raw` to 1, 2, 2.5 or 5 times a power of ten.
fn nice_step(raw: f64) -> f64 {
    let exp = raw.log10().floor();
    let base = 10f64.powf(exp);
    let frac = raw / base;
    let nice = if frac <= 1.0 {
        1.0
    } else if frac <= 2.0 {
        2.0
    } else if frac <= 2.5 {
        2.5
    } else if frac <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * base
}

/// Tick positions at "nice" values covering `[min, max]`, about `target` of them.
/// Returns `(ticks, step)`.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> (Vec<f64>, f64) {
    // the span can overflow even when both ends are finite
    if !min.is_finite() || !max.is_finite() || max <= min || !(max - min).is_finite() {
        return (vec![min], 1.0);
    }
    let target = target.max(2);
    let step = nice_step((max - min) / target as f64);
    let first = (min / step).ceil() * step;
    if !step.is_finite() || step <= 0.0 || !first.is_finite() {
        return (vec![min], 1.0);
    }
    let eps = step * 1e-6;
    let mut ticks = Vec::new();
    for k in 0..=target * 4 + 2 {
        let v = first + step * k as f64;
        if !v.is_finite() || v > max + eps { break; }
        // snap -0.0 and float noise onto the step grid
        let v = (v / step).round() * step;
        ticks.push(if v == 0.0 { 0.0 } else { v });
    }
    (ticks, step)
}

/// Compact tick label: k/M notation for large magnitudes, decimals from the step otherwise.
pub fn format_tick(v: f64, step: f64) -> String {
    let a = v.abs();
    if a >= 1_000_000.0 {
        format!("{:.1}M", v / 1_000_000.0)
    } else if a >= 10_000.0 {
        if step >= 1000.0 {
            format!("{:.0}k", v / 1000.0)
        } else {
            format!("{:.1}k", v / 1000.0)
        }
    } else {
        format!("{:.*}", step_decimals(step), v)
    }
}

/// Digits after the point needed to print multiples of `step` exactly (max 6).
fn step_decimals(step: f64) -> usize {
    (0..6)
        .find(|&d| {
            let scaled = step * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-9 * scaled.abs().max(1.0)
        })
        .unwrap_or(6)
}
