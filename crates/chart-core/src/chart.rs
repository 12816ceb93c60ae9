// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and headless PNG rendering pipeline using Skia CPU raster surfaces.
// Notes:
// - Layout happens in logical pixels (100 per inch); the canvas is scaled by
//   `dpi / 100` so a 12x8 in figure at 300 dpi comes out as 3600x2400 px.
// - Every render creates and drops its own surface; nothing is shared between calls.

use anyhow::Result;
use skia_safe as skia;

use crate::axis::{ScaleKind, Tick};
use crate::geometry::PlotRect;
use crate::scale::AxisScale;
use crate::series::{Series, SeriesType};
use crate::style::draw_marker;
use crate::text::{HAlign, TextShaper, TextSpec, VAlign};
use crate::theme::Theme;
use crate::types::{device_px, Insets, DPI, HEIGHT, LOGICAL_DPI, WIDTH};
use crate::Axis;

/// Point sizes converted to logical pixels.
const TITLE_PX: f32 = 14.0 * LOGICAL_DPI / 72.0;
const LABEL_PX: f32 = 12.0 * LOGICAL_DPI / 72.0;
const TICK_PX: f32 = 10.0 * LOGICAL_DPI / 72.0;
const LEGEND_PX: f32 = 10.0 * LOGICAL_DPI / 72.0;

const TICK_PAD: f32 = 8.0;
const LABEL_PAD: f32 = 10.0;

pub struct RenderOptions {
    /// Figure width in logical pixels.
    pub width: i32,
    /// Figure height in logical pixels.
    pub height: i32,
    pub dpi: u32,
    pub insets: Insets,
    pub theme: Theme,
    /// Render title, axis labels, tick labels and legend text.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            dpi: DPI,
            insets: Insets::default(),
            theme: Theme::report(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    /// Output image size in device pixels.
    pub fn pixel_size(&self) -> (i32, i32) {
        (device_px(self.width, self.dpi), device_px(self.height, self.dpi))
    }
}

pub struct Chart {
    pub title: String,
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: bool,
}

impl Chart {
    pub fn new() -> Self {
        Self {
            title: String::new(),
            series: Vec::new(),
            x_axis: Axis::new("", 0.0, 1.0),
            y_axis: Axis::new("", 0.0, 1.0),
            legend: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Names shown in the legend: non-empty series, in insertion order.
    pub fn legend_entries(&self) -> Vec<&Series> {
        self.series.iter().filter(|s| !s.is_empty()).collect()
    }

    /// Fit the y axis to the data with `margin` (fraction of span) on both ends.
    /// Bar charts always include the 0.0 baseline and get no margin below it.
    pub fn autoscale_y(&mut self, margin: f64) {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        let mut has_bars = false;
        for s in &self.series {
            if let Some((a, b)) = s.y_range() {
                lo = lo.min(a);
                hi = hi.max(b);
            }
            has_bars |= s.series_type == SeriesType::Bar;
        }
        if !lo.is_finite() || !hi.is_finite() {
            self.y_axis.min = 0.0;
            self.y_axis.max = 1.0;
            return;
        }
        if has_bars {
            lo = lo.min(0.0);
            hi = hi.max(0.0);
        }
        let span = hi - lo;
        let pad = if span < 1e-12 { (hi.abs() * 0.05).max(1.0) } else { span * margin };
        self.y_axis.min = if has_bars && lo == 0.0 { 0.0 } else { lo - pad };
        self.y_axis.max = hi + pad;
    }

    /// Render the chart to a PNG at `output_png_path` using a CPU raster surface.
    /// Parent directories are created; an existing file is overwritten.
    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render the chart and return encoded PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let (pw, ph) = opts.pixel_size();
        let mut surface = skia::surfaces::raster_n32_premul((pw, ph))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", pw, ph))?;

        self.draw(surface.canvas(), opts);

        // Snapshot and encode PNG
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        canvas.clear(theme.background);
        let s = opts.dpi as f32 / LOGICAL_DPI;
        canvas.scale((s, s));

        let x_ticks = self.x_axis.resolved_ticks();
        let y_ticks = self.y_axis.resolved_ticks();

        let shaper = if opts.draw_labels { Some(TextShaper::new()) } else { None };
        let rect = match &shaper {
            Some(sh) => self.fit_plot_rect(sh, opts, &x_ticks, &y_ticks),
            None => PlotRect::inset(opts.width, opts.height, &opts.insets),
        };

        let xs = AxisScale::for_axis(&self.x_axis, rect.left, rect.right);
        let ys = AxisScale::for_axis(&self.y_axis, rect.bottom, rect.top);

        // Plot area & grid
        let mut bg = skia::Paint::default();
        bg.set_color(theme.plot_background);
        canvas.draw_rect(skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom), &bg);
        draw_grid(canvas, &rect, &xs, &ys, &self.x_axis, &x_ticks, &y_ticks, theme);

        // Series, clipped to the plot area
        canvas.save();
        canvas.clip_rect(skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom), skia::ClipOp::Intersect, true);
        for series in &self.series {
            match series.series_type {
                SeriesType::Line => draw_line_series(canvas, &xs, &ys, series),
                SeriesType::Bar => draw_bar_series(canvas, &xs, &ys, series),
            }
        }
        canvas.restore();

        draw_frame(canvas, &rect, theme);

        if let Some(sh) = &shaper {
            draw_tick_labels(canvas, sh, &rect, &xs, &ys, &self.x_axis, &x_ticks, &y_ticks, theme);
            self.draw_titles(canvas, sh, &rect, opts, &x_ticks, &y_ticks);
            if self.legend {
                draw_legend(canvas, sh, &rect, &self.legend_entries(), theme);
            }
        }
    }

    /// Grow the insets so tick labels, axis labels and the title fit.
    fn fit_plot_rect(&self, sh: &TextShaper, opts: &RenderOptions, x_ticks: &[Tick], y_ticks: &[Tick]) -> PlotRect {
        let mut insets = opts.insets;
        let x_extent = x_tick_extent(sh, &self.x_axis, x_ticks);
        let y_extent = y_ticks
            .iter()
            .map(|t| sh.measure(&t.label, TICK_PX, false).0)
            .fold(0.0_f32, f32::max);
        let (_, label_h) = sh.measure("Ag", LABEL_PX, false);
        let (_, title_h) = sh.measure("Ag", TITLE_PX, true);

        let need_bottom = TICK_PAD + x_extent + LABEL_PAD + label_h + LABEL_PAD;
        let need_left = TICK_PAD + y_extent + LABEL_PAD + label_h + LABEL_PAD;
        let need_top = title_h + 2.0 * LABEL_PAD;
        insets.bottom = insets.bottom.max(need_bottom.ceil() as u32);
        insets.left = insets.left.max(need_left.ceil() as u32);
        insets.top = insets.top.max(need_top.ceil() as u32);
        PlotRect::inset(opts.width, opts.height, &insets)
    }

    fn draw_titles(
        &self,
        canvas: &skia::Canvas,
        sh: &TextShaper,
        rect: &PlotRect,
        opts: &RenderOptions,
        x_ticks: &[Tick],
        y_ticks: &[Tick],
    ) {
        let theme = &opts.theme;
        let title = TextSpec::new(TITLE_PX, theme.title).bold().align(HAlign::Center, VAlign::Bottom);
        sh.draw(canvas, &self.title, (rect.center_x(), rect.top - LABEL_PAD), &title);

        let x_extent = x_tick_extent(sh, &self.x_axis, x_ticks);
        let xl = TextSpec::new(LABEL_PX, theme.axis_label).align(HAlign::Center, VAlign::Top);
        sh.draw(canvas, &self.x_axis.label, (rect.center_x(), rect.bottom + TICK_PAD + x_extent + LABEL_PAD), &xl);

        let y_extent = y_ticks
            .iter()
            .map(|t| sh.measure(&t.label, TICK_PX, false).0)
            .fold(0.0_f32, f32::max);
        let yl = TextSpec::new(LABEL_PX, theme.axis_label)
            .align(HAlign::Center, VAlign::Bottom)
            .rotated(90.0);
        sh.draw(canvas, &self.y_axis.label, (rect.left - TICK_PAD - y_extent - LABEL_PAD, rect.center_y()), &yl);
    }
}

impl Default for Chart {
    fn default() -> Self { Self::new() }
}

// ---- helpers ----------------------------------------------------------------

/// Vertical space taken by x tick labels, accounting for rotation.
fn x_tick_extent(sh: &TextShaper, axis: &Axis, ticks: &[Tick]) -> f32 {
    let theta = axis.label_rotation.to_radians();
    ticks
        .iter()
        .map(|t| {
            let (w, h) = sh.measure(&t.label, TICK_PX, false);
            w * theta.sin().abs() + h * theta.cos().abs()
        })
        .fold(0.0_f32, f32::max)
}

#[allow(clippy::too_many_arguments)]
fn draw_grid(
    canvas: &skia::Canvas,
    rect: &PlotRect,
    xs: &AxisScale,
    ys: &AxisScale,
    x_axis: &Axis,
    x_ticks: &[Tick],
    y_ticks: &[Tick],
    theme: &Theme,
) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    // categorical axes get no vertical grid
    if x_axis.kind != ScaleKind::Category {
        for t in x_ticks {
            let x = xs.to_px(t.value);
            canvas.draw_line((x, rect.top), (x, rect.bottom), &paint);
        }
    }
    for t in y_ticks {
        let y = ys.to_px(t.value);
        canvas.draw_line((rect.left, y), (rect.right, y), &paint);
    }
}

fn draw_frame(canvas: &skia::Canvas, rect: &PlotRect, theme: &Theme) {
    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_style(skia::paint::Style::Stroke);
    axis_paint.set_stroke_width(1.0);
    canvas.draw_rect(skia::Rect::from_ltrb(rect.left, rect.top, rect.right, rect.bottom), &axis_paint);
}

#[allow(clippy::too_many_arguments)]
fn draw_tick_labels(
    canvas: &skia::Canvas,
    sh: &TextShaper,
    rect: &PlotRect,
    xs: &AxisScale,
    ys: &AxisScale,
    x_axis: &Axis,
    x_ticks: &[Tick],
    y_ticks: &[Tick],
    theme: &Theme,
) {
    let x_spec = if x_axis.label_rotation != 0.0 {
        TextSpec::new(TICK_PX, theme.tick)
            .align(HAlign::Right, VAlign::Top)
            .rotated(x_axis.label_rotation)
    } else {
        TextSpec::new(TICK_PX, theme.tick).align(HAlign::Center, VAlign::Top)
    };
    for t in x_ticks {
        sh.draw(canvas, &t.label, (xs.to_px(t.value), rect.bottom + TICK_PAD), &x_spec);
    }

    let y_spec = TextSpec::new(TICK_PX, theme.tick).align(HAlign::Right, VAlign::Middle);
    for t in y_ticks {
        sh.draw(canvas, &t.label, (rect.left - TICK_PAD, ys.to_px(t.value)), &y_spec);
    }
}

fn draw_line_series(canvas: &skia::Canvas, xs: &AxisScale, ys: &AxisScale, series: &Series) {
    let data = &series.data_xy;
    if data.is_empty() {
        return;
    }
    let style = &series.style;
    let pts: Vec<(f32, f32)> = data.iter().map(|&(x, y)| (xs.to_px(x), ys.to_px(y))).collect();

    // A single point cannot form a segment; it is shown by its marker alone.
    if pts.len() >= 2 {
        let mut path = skia::Path::new();
        path.move_to(pts[0]);
        for &p in pts.iter().skip(1) {
            path.line_to(p);
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(style.line_width);
        stroke.set_stroke_join(skia::paint::Join::Round);
        stroke.set_color(style.color);
        stroke.set_path_effect(style.dash.path_effect(style.line_width));
        canvas.draw_path(&path, &stroke);
    }

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(style.color);
    for &p in &pts {
        draw_marker(canvas, style.marker, p, style.marker_size, &fill);
    }
}

fn draw_bar_series(canvas: &skia::Canvas, xs: &AxisScale, ys: &AxisScale, series: &Series) {
    if series.data_xy.is_empty() { return; }

    let mut body = skia::Paint::default();
    body.set_anti_alias(true);
    body.set_style(skia::paint::Style::Fill);

    // bar width: 80% of one category slot
    let half = xs.unit_px().abs() * 0.4;
    let base = ys.to_px(0.0_f64.clamp(ys.vmin, ys.vmax));

    for (i, &(x, y)) in series.data_xy.iter().enumerate() {
        body.set_color(series.bar_color(i));
        let cx = xs.to_px(x);
        let top = ys.to_px(y);
        let rect = skia::Rect::from_ltrb(cx - half, top.min(base), cx + half, top.max(base));
        canvas.draw_rect(rect, &body);
    }
}

fn draw_legend(canvas: &skia::Canvas, sh: &TextShaper, rect: &PlotRect, entries: &[&Series], theme: &Theme) {
    if entries.is_empty() { return; }

    const PAD: f32 = 8.0;
    const SAMPLE_W: f32 = 30.0;
    const GAP: f32 = 8.0;

    let sizes: Vec<(f32, f32)> = entries.iter().map(|s| sh.measure(&s.name, LEGEND_PX, false)).collect();
    let text_w = sizes.iter().map(|s| s.0).fold(0.0_f32, f32::max);
    let row_h = sizes.iter().map(|s| s.1).fold(LEGEND_PX, f32::max) + 4.0;

    let left = rect.left + 10.0;
    let top = rect.top + 10.0;
    let width = PAD + SAMPLE_W + GAP + text_w + PAD;
    let height = PAD + row_h * entries.len() as f32 + PAD;
    let frame = skia::Rect::from_xywh(left, top, width, height);

    let mut bg = skia::Paint::default();
    bg.set_anti_alias(true);
    bg.set_color(theme.legend_background);
    canvas.draw_round_rect(frame, 4.0, 4.0, &bg);
    let mut edge = skia::Paint::default();
    edge.set_anti_alias(true);
    edge.set_style(skia::paint::Style::Stroke);
    edge.set_stroke_width(1.0);
    edge.set_color(theme.legend_frame);
    canvas.draw_round_rect(frame, 4.0, 4.0, &edge);

    let label = TextSpec::new(LEGEND_PX, theme.axis_label).align(HAlign::Left, VAlign::Middle);
    for (i, s) in entries.iter().enumerate() {
        let cy = top + PAD + row_h * (i as f32 + 0.5);
        let x0 = left + PAD;
        let style = &s.style;

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(style.line_width);
        stroke.set_color(style.color);
        stroke.set_path_effect(style.dash.path_effect(style.line_width));
        canvas.draw_line((x0, cy), (x0 + SAMPLE_W, cy), &stroke);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_color(style.color);
        draw_marker(canvas, style.marker, (x0 + SAMPLE_W * 0.5, cy), style.marker_size, &fill);

        sh.draw(canvas, &s.name, (x0 + SAMPLE_W + GAP, cy), &label);
    }
}
