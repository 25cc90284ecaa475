// File: crates/trajplot-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline (PNG file, PNG bytes, RGBA8) using Skia CPU raster surfaces.

use std::path::Path;

use skia_safe as skia;

use crate::error::{PlotError, Result};
use crate::geometry::RectI32;
use crate::grid::{format_tick, nice_ticks};
use crate::scale::LinearScale;
use crate::series::Series;
use crate::text::TextShaper;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;
use crate::Axis;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Title, tick labels, axis labels and legend text. Off for pixel-exact tests.
    pub draw_labels: bool,
    pub font_size: f32,
    pub line_width: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            font_size: 11.0,
            line_width: 1.5,
        }
    }
}

impl RenderOptions {
    pub fn sized(width: i32, height: i32, theme: Theme) -> Self {
        Self { width, height, theme, ..Self::default() }
    }
}

#[derive(Clone, Debug)]
pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Same data units per pixel on both axes.
    pub equal_aspect: bool,
    pub show_legend: bool,
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            equal_aspect: false,
            show_legend: true,
        }
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Fit both axes to the finite data with `margin` (fraction of span) on each side.
    pub fn autoscale_axes(&mut self, margin: f64) {
        ViewState::from_chart(self, margin).apply_to_chart(self);
    }

    /// Axis ranges actually drawn on a surface of the given options.
    pub fn effective_view(&self, opts: &RenderOptions) -> ViewState {
        let mut view = ViewState::of_chart(self);
        if self.equal_aspect {
            let rect = RectI32::plot_area(opts.width, opts.height, &opts.insets);
            view.equalize_aspect(rect.width() as f64, rect.height() as f64);
        }
        view
    }

    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let info = skia::ImageInfo::new(
            (opts.width.max(1), opts.height.max(1)),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Premul,
            None,
        );
        let mut surface = skia::surfaces::raster(&info, None, None)
            .ok_or_else(|| PlotError::Render("failed to create raster surface".into()))?;
        self.draw(surface.canvas(), opts);
        Ok(surface)
    }

    /// Render into a tightly packed RGBA8 buffer. Returns `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Premul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(PlotError::Render("failed to read back pixels".into()));
        }
        Ok((pixels, w, h, stride))
    }

    /// Render and encode as PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| PlotError::Render("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let rect = RectI32::plot_area(opts.width, opts.height, &opts.insets);
        let view = self.effective_view(opts);
        let x_axis = Axis::new(self.x_axis.label.clone(), view.x_min, view.x_max);
        let y_axis = Axis::new(self.y_axis.label.clone(), view.y_min, view.y_max);
        let sx = LinearScale::horizontal(&rect, &x_axis);
        let sy = LinearScale::vertical(&rect, &y_axis);

        let x_target = (rect.width() / 80).max(2) as usize;
        let y_target = (rect.height() / 45).max(2) as usize;
        let (x_ticks, x_step) = nice_ticks(x_axis.min, x_axis.max, x_target);
        let (y_ticks, y_step) = nice_ticks(y_axis.min, y_axis.max, y_target);

        let mut fill = skia::Paint::default();
        fill.set_color(theme.plot_background);
        canvas.draw_rect(to_rect(&rect), &fill);

        draw_grid(canvas, &rect, &sx, &sy, &x_ticks, &y_ticks, theme);

        canvas.save();
        canvas.clip_rect(to_rect(&rect), None, true);
        for (i, s) in self.series.iter().enumerate() {
            draw_line_series(canvas, &sx, &sy, s, theme.series_color(i), opts.line_width);
        }
        canvas.restore();

        draw_frame(canvas, &rect, theme);

        if opts.draw_labels {
            let text = TextShaper::new();
            draw_tick_labels(canvas, &text, &rect, &sx, &sy, (&x_ticks, x_step), (&y_ticks, y_step), opts);
            draw_axis_labels(canvas, &text, &rect, &x_axis, &y_axis, opts);
            if !self.title.is_empty() {
                let cx = (rect.left + rect.right) as f32 * 0.5;
                text.draw_centered(canvas, &self.title, cx, rect.top as f32 - 9.0, opts.font_size + 1.0, theme.axis_label);
            }
            if self.show_legend && !self.series.is_empty() {
                draw_legend(canvas, &text, &rect, &self.series, opts);
            }
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn to_rect(r: &RectI32) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

fn draw_grid(
    canvas: &skia::Canvas,
    rect: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: &[f64],
    y_ticks: &[f64],
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(0.8);

    let (l, t, r, b) = (rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
    // verticals
    for &x in x_ticks {
        let px = sx.to_px(x);
        canvas.draw_line((px, t), (px, b), &paint);
    }
    // horizontals
    for &y in y_ticks {
        let py = sy.to_px(y);
        canvas.draw_line((l, py), (r, py), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, rect: &RectI32, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(1.0);
    canvas.draw_rect(to_rect(rect), &axis_paint);
}

fn draw_line_series(
    canvas: &skia::Canvas,
    sx: &LinearScale,
    sy: &LinearScale,
    series: &Series,
    color: skia::Color,
    width: f32,
) {
    let mut path = skia::Path::new();
    for seg in series.segments() {
        let (x0, y0) = seg[0];
        path.move_to((sx.to_px(x0), sy.to_px(y0)));
        if seg.len() == 1 {
            // isolated point: a zero-length segment still gets a round cap
            path.line_to((sx.to_px(x0), sy.to_px(y0)));
        }
        for &(x, y) in seg.iter().skip(1) {
            path.line_to((sx.to_px(x), sy.to_px(y)));
        }
    }
    if path.is_empty() {
        return;
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(width);
    stroke.set_stroke_cap(skia::paint::Cap::Round);
    stroke.set_stroke_join(skia::paint::Join::Round);
    stroke.set_color(color);

    canvas.draw_path(&path, &stroke);
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    text: &TextShaper,
    rect: &RectI32,
    sx: &LinearScale,
    sy: &LinearScale,
    x_ticks: (&[f64], f64),
    y_ticks: (&[f64], f64),
    opts: &RenderOptions,
) {
    let size = opts.font_size - 1.0;
    let color = opts.theme.tick;
    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(opts.theme.axis_line);
    tick_paint.set_stroke_width(1.0);

    for &x in x_ticks.0 {
        let px = sx.to_px(x);
        canvas.draw_line((px, rect.bottom as f32), (px, rect.bottom as f32 + 4.0), &tick_paint);
        text.draw_centered(canvas, &format_tick(x, x_ticks.1), px, rect.bottom as f32 + 6.0 + size, size, color);
    }
    for &y in y_ticks.0 {
        let py = sy.to_px(y);
        canvas.draw_line((rect.left as f32 - 4.0, py), (rect.left as f32, py), &tick_paint);
        text.draw_right(canvas, &format_tick(y, y_ticks.1), rect.left as f32 - 6.0, py + size * 0.4, size, color);
    }
}

fn draw_axis_labels(
    canvas: &skia::Canvas,
    text: &TextShaper,
    rect: &RectI32,
    x: &Axis,
    y: &Axis,
    opts: &RenderOptions,
) {
    let color = opts.theme.axis_label;
    let size = opts.font_size;
    let cx = (rect.left + rect.right) as f32 * 0.5;
    let cy = (rect.top + rect.bottom) as f32 * 0.5;
    text.draw_centered(canvas, &x.label, cx, opts.height as f32 - 6.0, size, color);
    text.draw_vertical(canvas, &y.label, size + 2.0, cy, size, color);
}

fn draw_legend(canvas: &skia::Canvas, text: &TextShaper, rect: &RectI32, series: &[Series], opts: &RenderOptions) {
    let size = opts.font_size - 2.0;
    let row_h = size + 5.0;
    let swatch = 18.0f32;
    let pad = 5.0f32;
    let label_w = series
        .iter()
        .map(|s| text.measure_width(&s.label, size))
        .fold(0.0f32, f32::max);
    let box_w = pad * 3.0 + swatch + label_w;
    let box_h = pad * 2.0 + row_h * series.len() as f32;
    let right = rect.right as f32 - 6.0;
    let top = rect.top as f32 + 6.0;
    let frame = skia::Rect::from_ltrb(right - box_w, top, right, top + box_h);

    let mut bg = skia::Paint::default();
    bg.set_anti_alias(true);
    bg.set_color(opts.theme.legend_background);
    canvas.draw_round_rect(frame, 3.0, 3.0, &bg);
    let mut border = skia::Paint::default();
    border.set_anti_alias(true);
    border.set_style(skia::paint::Style::Stroke);
    border.set_color(opts.theme.legend_border);
    canvas.draw_round_rect(frame, 3.0, 3.0, &border);

    let mut line = skia::Paint::default();
    line.set_anti_alias(true);
    line.set_stroke_width(opts.line_width);
    for (i, s) in series.iter().enumerate() {
        let baseline = top + pad + row_h * (i as f32 + 1.0) - 4.0;
        let mid = baseline - size * 0.35;
        line.set_color(opts.theme.series_color(i));
        let x0 = frame.left + pad;
        canvas.draw_line((x0, mid), (x0 + swatch, mid), &line);
        text.draw_left(canvas, &s.label, x0 + swatch + pad, baseline, size, opts.theme.axis_label);
    }
}
