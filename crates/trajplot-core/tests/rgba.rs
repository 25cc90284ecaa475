// File: crates/trajplot-core/tests/rgba.rs
// Purpose: Validate RGBA rendering buffer shape and a few pixels.

use trajplot_core::{Axis, Chart, RenderOptions, Series, Theme};

#[test]
fn render_rgba8_buffer() {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("X", 0.0, 4.0);
    chart.y_axis = Axis::new("Y", 0.0, 4.0);
    chart.add_series(Series::with_data("y", vec![(0.0, 0.0), (4.0, 4.0)]));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    let (px, w, h, stride) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Top-left pixel is opaque white background with the light theme
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);
}

#[test]
fn dark_theme_changes_background() {
    let chart = Chart::new();
    let mut opts = RenderOptions::sized(64, 48, Theme::dark());
    opts.draw_labels = false;
    let (px, w, h, _) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (64, 48));
    assert_eq!(&px[0..4], &[18, 18, 20, 255]);
}

#[test]
fn huge_magnitudes_render() {
    // autoscaled view spans more than f64::MAX
    let mut chart = Chart::new();
    chart.add_series(Series::with_data("y_m", vec![(0.0, 0.0), (1.0, 1.7e308)]));
    chart.autoscale_axes(0.05);
    assert!(chart.y_axis.min.is_finite() && chart.y_axis.max.is_finite());

    let opts = RenderOptions::sized(120, 80, Theme::light());
    let (px, w, h, _) = chart.render_to_rgba8(&opts).expect("rgba render");
    assert_eq!(px.len(), (w * h * 4) as usize);
}
