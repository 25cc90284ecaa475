// File: crates/trajplot-core/src/text.rs
// Summary: Text shaper/renderer for titles, tick and axis labels using Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["DejaVu Sans", "Segoe UI", "Arial", "Helvetica", "Roboto", "sans-serif"]);
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0));
        // width of the longest line
        p.longest_line()
    }

    /// Draw with the baseline at `y`, starting at `x`.
    pub fn draw_left(&self, canvas: &skia::Canvas, text: &str, x: f32, y: f32, size: f32, color: skia::Color) {
        let mut p = self.layout(text, size, color);
        // Paragraph draws from top-left; adjust baseline by glyph height approximation
        p.paint(canvas, (x, y - size * 0.8));
    }

    /// Draw centered horizontally on `cx`, baseline at `y`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, y: f32, size: f32, color: skia::Color) {
        let w = self.measure_width(text, size);
        self.draw_left(canvas, text, cx - w * 0.5, y, size, color);
    }

    /// Draw right-aligned so the text ends at `right`, baseline at `y`.
    pub fn draw_right(&self, canvas: &skia::Canvas, text: &str, right: f32, y: f32, size: f32, color: skia::Color) {
        let w = self.measure_width(text, size);
        self.draw_left(canvas, text, right - w, y, size, color);
    }

    /// Draw rotated 90° counter-clockwise, centered vertically on `cy`, for Y axis labels.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, x: f32, cy: f32, size: f32, color: skia::Color) {
        let w = self.measure_width(text, size);
        canvas.save();
        canvas.translate((x, cy));
        canvas.rotate(-90.0, None);
        self.draw_left(canvas, text, -w * 0.5, 0.0, size, color);
        canvas.restore();
    }
}
