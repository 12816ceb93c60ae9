// File: crates/chart-core/src/scale.rs
// Summary: Data-to-pixel transforms for linear, log10 and categorical axes.

use crate::axis::{Axis, ScaleKind};

/// Maps a data range onto a pixel span. `start_px` receives `vmin`, so a
/// vertical scale is built with `start_px = bottom` and `end_px = top`.
#[derive(Clone, Copy, Debug)]
pub struct AxisScale {
    pub start_px: f32,
    pub end_px: f32,
    pub vmin: f64,
    pub vmax: f64,
    pub log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl AxisScale {
    pub fn new_linear(start_px: f32, end_px: f32, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { start_px, end_px, vmin, vmax, log: false, log_min: 0.0, log_max: 0.0 };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    pub fn new_log10(start_px: f32, end_px: f32, mut vmin: f64, mut vmax: f64) -> Self {
        // Ensure strictly positive range for log scale
        let eps = 1e-12;
        vmin = if vmin <= eps { eps } else { vmin };
        vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        let log_min = vmin.log10();
        let log_max = vmax.log10();
        Self { start_px, end_px, vmin, vmax, log: true, log_min, log_max }
    }

    /// Scale for `axis` spanning `start_px..end_px`.
    pub fn for_axis(axis: &Axis, start_px: f32, end_px: f32) -> Self {
        match axis.kind {
            ScaleKind::Log10 => Self::new_log10(start_px, end_px, axis.min, axis.max),
            ScaleKind::Linear | ScaleKind::Category => Self::new_linear(start_px, end_px, axis.min, axis.max),
        }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let frac = if self.log {
            let vv = v.max(1e-12).log10();
            (vv - self.log_min) / (self.log_max - self.log_min).max(1e-12)
        } else {
            (v - self.vmin) / (self.vmax - self.vmin).max(1e-12)
        };
        self.start_px + frac as f32 * (self.end_px - self.start_px)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let frac = ((px - self.start_px) / (self.end_px - self.start_px)) as f64;
        if self.log {
            10f64.powf(self.log_min + frac * (self.log_max - self.log_min))
        } else {
            self.vmin + frac * (self.vmax - self.vmin)
        }
    }

    /// Pixel length of one data unit; meaningful for linear/categorical scales.
    pub fn unit_px(&self) -> f32 {
        ((self.end_px - self.start_px) as f64 / (self.vmax - self.vmin).max(1e-12)) as f32
    }
}
