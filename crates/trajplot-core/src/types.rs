// File: crates/trajplot-core/src/types.rs
// Summary: Shared types and constants (default figure size, paddings).

/// Default surface width in pixels (6 in at 80 dpi).
pub const WIDTH: i32 = 480;
/// Default surface height in pixels (4 in at 80 dpi).
pub const HEIGHT: i32 = 320;

/// Space around the plot area for title, tick labels and axis labels, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(68, 16, 30, 44)
    }
}
