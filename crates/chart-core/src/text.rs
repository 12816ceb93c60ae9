// File: crates/chart-core/src/text.rs
// Summary: Simple text shaper/renderer using Skia textlayout with anchoring and rotation.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HAlign { Left, Center, Right }

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VAlign { Top, Middle, Bottom }

/// How a run of text is drawn relative to its anchor point.
#[derive(Clone, Copy, Debug)]
pub struct TextSpec {
    pub size: f32,
    pub color: skia::Color,
    pub bold: bool,
    pub h: HAlign,
    pub v: VAlign,
    /// Counter-clockwise rotation about the anchor, in degrees.
    pub rotation: f32,
}

impl TextSpec {
    pub fn new(size: f32, color: skia::Color) -> Self {
        Self { size, color, bold: false, h: HAlign::Left, v: VAlign::Top, rotation: 0.0 }
    }
    pub fn bold(mut self) -> Self { self.bold = true; self }
    pub fn align(mut self, h: HAlign, v: VAlign) -> Self { self.h = h; self.v = v; self }
    pub fn rotated(mut self, degrees: f32) -> Self { self.rotation = degrees; self }
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["DejaVu Sans", "Arial", "Helvetica", "Segoe UI", "Roboto", "sans-serif"]);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, bold);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// (width, height) of `text` laid out on one line.
    pub fn measure(&self, text: &str, size: f32, bold: bool) -> (f32, f32) {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0), bold);
        (p.max_intrinsic_width(), p.height())
    }

    /// Draw `text` anchored at `at` according to `spec`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, at: (f32, f32), spec: &TextSpec) {
        if text.is_empty() { return; }
        let mut p = self.layout(text, spec.size, spec.color, spec.bold);
        let w = p.max_intrinsic_width();
        let h = p.height();
        let dx = match spec.h {
            HAlign::Left => 0.0,
            HAlign::Center => -w * 0.5,
            HAlign::Right => -w,
        };
        let dy = match spec.v {
            VAlign::Top => 0.0,
            VAlign::Middle => -h * 0.5,
            VAlign::Bottom => -h,
        };
        canvas.save();
        canvas.translate(at);
        if spec.rotation != 0.0 {
            // Skia rotates clockwise for positive angles in y-down space
            canvas.rotate(-spec.rotation, None);
        }
        p.paint(canvas, (dx, dy));
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
