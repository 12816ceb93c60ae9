// File: crates/chart-core/src/theme.rs
// Summary: Fixed report theme: figure/plot colors and the qualitative bar palette.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub background: skia::Color,
    pub plot_background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub title: skia::Color,
    pub legend_background: skia::Color,
    pub legend_frame: skia::Color,
    pub palette: [skia::Color; 10],
}

impl Theme {
    /// Light grey-blue plot area with white grid lines at 30% opacity.
    pub fn report() -> Self {
        Self {
            background: skia::Color::from_argb(255, 255, 255, 255),
            plot_background: skia::Color::from_argb(255, 0xea, 0xea, 0xf2),
            grid: skia::Color::from_argb(77, 0x55, 0x55, 0x66),
            axis_line: skia::Color::from_argb(255, 0x99, 0x99, 0xa3),
            axis_label: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            tick: skia::Color::from_argb(255, 0x26, 0x26, 0x26),
            title: skia::Color::from_argb(255, 0x10, 0x10, 0x10),
            legend_background: skia::Color::from_argb(204, 255, 255, 255),
            legend_frame: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            palette: husl_palette(),
        }
    }

    /// Palette color for slot `i`, cycling.
    pub fn palette_color(&self, i: usize) -> skia::Color {
        self.palette[i % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::report() }
}

/// Ten evenly spaced hues at equal lightness (HUSL-like qualitative palette).
fn husl_palette() -> [skia::Color; 10] {
    [
        skia::Color::from_argb(255, 0xf7, 0x70, 0x89),
        skia::Color::from_argb(255, 0xd5, 0x8c, 0x32),
        skia::Color::from_argb(255, 0xa4, 0xa0, 0x31),
        skia::Color::from_argb(255, 0x50, 0xb1, 0x31),
        skia::Color::from_argb(255, 0x34, 0xae, 0x91),
        skia::Color::from_argb(255, 0x37, 0xab, 0xb5),
        skia::Color::from_argb(255, 0x3b, 0xa3, 0xec),
        skia::Color::from_argb(255, 0xba, 0x7d, 0xf4),
        skia::Color::from_argb(255, 0xf4, 0x61, 0xdd),
        skia::Color::from_argb(255, 0xf6, 0x6b, 0xb4),
    ]
}
