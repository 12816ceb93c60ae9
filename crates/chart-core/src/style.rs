// File: crates/chart-core/src/style.rs
// Summary: Per-series stroke style: color, dash pattern and marker shape.

use skia_safe as skia;

/// Line pattern, named after the usual plotting shorthands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dash {
    /// `-`
    Solid,
    /// `--`
    Dashed,
    /// `:`
    Dotted,
}

impl Dash {
    /// On/off intervals in units of line width; empty for solid lines.
    pub fn intervals(&self) -> &'static [f32] {
        match self {
            Dash::Solid => &[],
            Dash::Dashed => &[3.7, 1.6],
            Dash::Dotted => &[1.0, 1.65],
        }
    }

    /// Dash path effect scaled to `width`, or `None` for solid lines.
    pub fn path_effect(&self, width: f32) -> Option<skia::PathEffect> {
        let iv = self.intervals();
        if iv.is_empty() { return None; }
        let scaled: Vec<f32> = iv.iter().map(|v| v * width).collect();
        skia::PathEffect::dash(&scaled, 0.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    /// `o`
    Circle,
    /// `s`
    Square,
    /// `^`
    Triangle,
    /// `D`
    Diamond,
}

#[derive(Clone, Copy, Debug)]
pub struct SeriesStyle {
    pub color: skia::Color,
    pub dash: Dash,
    pub marker: Marker,
    /// Stroke width in logical pixels.
    pub line_width: f32,
    /// Marker diameter in logical pixels.
    pub marker_size: f32,
}

impl SeriesStyle {
    pub const fn new(color: skia::Color, dash: Dash, marker: Marker) -> Self {
        // 2pt line, 6pt marker at 100 px/in
        Self { color, dash, marker, line_width: 2.8, marker_size: 8.3 }
    }
}

impl Default for SeriesStyle {
    /// Black, solid, circle markers.
    fn default() -> Self {
        Self::new(skia::Color::BLACK, Dash::Solid, Marker::Circle)
    }
}

/// Look up a basic named color (`blue`, `red`, ...). Unknown names give `None`.
pub fn named_color(name: &str) -> Option<skia::Color> {
    let rgb = match name.to_ascii_lowercase().as_str() {
        "black" => (0, 0, 0),
        "blue" => (0, 0, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "brown" => (165, 42, 42),
        "gray" | "grey" => (128, 128, 128),
        "cyan" => (0, 255, 255),
        "magenta" => (255, 0, 255),
        "darkgreen" => (0, 100, 0),
        "navy" => (0, 0, 128),
        _ => return None,
    };
    Some(skia::Color::from_argb(255, rgb.0, rgb.1, rgb.2))
}

/// Draw `marker` centred at `center` with `size` diameter using `paint`.
pub fn draw_marker(canvas: &skia::Canvas, marker: Marker, center: (f32, f32), size: f32, paint: &skia::Paint) {
    let (cx, cy) = center;
    let r = size * 0.5;
    match marker {
        Marker::Circle => {
            canvas.draw_circle((cx, cy), r, paint);
        }
        Marker::Square => {
            canvas.draw_rect(skia::Rect::from_ltrb(cx - r, cy - r, cx + r, cy + r), paint);
        }
        Marker::Triangle => {
            let mut path = skia::Path::new();
            path.move_to((cx, cy - r));
            path.line_to((cx + r, cy + r * 0.8));
            path.line_to((cx - r, cy + r * 0.8));
            path.close();
            canvas.draw_path(&path, paint);
        }
        Marker::Diamond => {
            let mut path = skia::Path::new();
            path.move_to((cx, cy - r));
            path.line_to((cx + r * 0.75, cy));
            path.line_to((cx, cy + r));
            path.line_to((cx - r * 0.75, cy));
            path.close();
            canvas.draw_path(&path, paint);
        }
    }
}
