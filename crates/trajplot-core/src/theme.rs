// File: crates/trajplot-core/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors and the series color cycle.

use skia_safe as skia;

/// Ten-color cycle (tab10) used for successive series in a chart.
const CYCLE: [(u8, u8, u8); 10] = [
    (0x1f, 0x77, 0xb4),
    (0xff, 0x7f, 0x0e),
    (0x2c, 0xa0, 0x2c),
    (0xd6, 0x27, 0x28),
    (0x94, 0x67, 0xbd),
    (0x8c, 0x56, 0x4b),
    (0xe3, 0x77, 0xc2),
    (0x7f, 0x7f, 0x7f),
    (0xbc, 0xbd, 0x22),
    (0x17, 0xbe, 0xcf),
];

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 176, 176, 176),
            axis_line: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 40, 40, 40),
            legend_background: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 204, 204, 204),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            plot_background: skia::Color::from_argb(255, 24, 24, 28),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            legend_background: skia::Color::from_argb(204, 30, 30, 34),
            legend_border: skia::Color::from_argb(255, 80, 80, 90),
        }
    }

    /// Stroke color for the `index`-th series of a chart.
    pub fn series_color(&self, index: usize) -> skia::Color {
        let (r, g, b) = CYCLE[index % CYCLE.len()];
        skia::Color::from_argb(255, r, g, b)
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    log::warn!("Unknown theme '{}', using light", name);
    Theme::light()
}
