// File: crates/chart-core/src/series.rs
// Summary: Series model for styled line series and categorical bars.

use skia_safe as skia;

use crate::style::SeriesStyle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeriesType {
    Line,
    /// One bar per point from baseline 0.0; x is the category slot.
    Bar,
}

#[derive(Clone)]
pub struct Series {
    pub name: String,
    pub series_type: SeriesType,
    pub data_xy: Vec<(f64, f64)>,
    pub style: SeriesStyle,
    /// Per-bar fill colors for `Bar`; cycled when shorter than the data.
    pub bar_colors: Vec<skia::Color>,
}

impl Series {
    pub fn new(name: impl Into<String>, series_type: SeriesType) -> Self {
        Self {
            name: name.into(),
            series_type,
            data_xy: Vec::new(),
            style: SeriesStyle::default(),
            bar_colors: Vec::new(),
        }
    }

    /// Line series; points are kept sorted by ascending x.
    pub fn line(name: impl Into<String>, mut data: Vec<(f64, f64)>, style: SeriesStyle) -> Self {
        data.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { data_xy: data, style, ..Self::new(name, SeriesType::Line) }
    }

    /// Bars at category slots `0..values.len()`.
    pub fn bars(name: impl Into<String>, values: &[f64], colors: Vec<skia::Color>) -> Self {
        let data = values.iter().enumerate().map(|(i, &v)| (i as f64, v)).collect();
        Self { data_xy: data, bar_colors: colors, ..Self::new(name, SeriesType::Bar) }
    }

    pub fn is_empty(&self) -> bool { self.data_xy.is_empty() }

    /// Fill color of the bar at `index`.
    pub fn bar_color(&self, index: usize) -> skia::Color {
        if self.bar_colors.is_empty() {
            self.style.color
        } else {
            self.bar_colors[index % self.bar_colors.len()]
        }
    }

    /// (min, max) over y values, if any.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        if self.data_xy.is_empty() { return None; }
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for &(_, y) in &self.data_xy {
            lo = lo.min(y);
            hi = hi.max(y);
        }
        Some((lo, hi))
    }
}
