// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (figure size, resolution, paddings).

/// Default figure width in logical pixels (12 in at 100 px/in).
pub const WIDTH: i32 = 1200;
/// Default figure height in logical pixels (8 in at 100 px/in).
pub const HEIGHT: i32 = 800;
/// Logical pixels per inch; layout is done in this unit.
pub const LOGICAL_DPI: f32 = 100.0;
/// Default output resolution.
pub const DPI: u32 = 300;

/// Screen margins, in logical pixels.
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
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(96, 32, 64, 84)
    }
}

/// Number of output pixels for `logical` pixels at `dpi`.
#[inline]
pub fn device_px(logical: i32, dpi: u32) -> i32 {
    (logical as f32 * dpi as f32 / LOGICAL_DPI).round() as i32
}
