// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels, ranges, scale kind and explicit ticks.

use crate::grid::{format_tick, nice_ticks};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleKind {
    Linear,
    Log10,
    /// Slots `0..n` centred on integer positions; used by bar charts.
    Category,
}

/// A tick mark at `value` with its rendered label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

impl Tick {
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self { value, label: label.into() }
    }

    /// Tick labelled with the formatted value.
    pub fn at(value: f64) -> Self {
        Self { value, label: format_tick(value) }
    }
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub kind: ScaleKind,
    /// Explicit ticks; `None` lets the renderer pick nice linear ticks.
    pub ticks: Option<Vec<Tick>>,
    /// Tick label rotation in degrees (counter-clockwise).
    pub label_rotation: f32,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, kind: ScaleKind::Linear, ticks: None, label_rotation: 0.0 }
    }

    pub fn log10(label: impl Into<String>, min: f64, max: f64) -> Self {
        let mut a = Self::new(label, min, max);
        a.kind = ScaleKind::Log10;
        a
    }

    /// Categorical axis over `categories`, one slot each, in the given order.
    pub fn category<S: AsRef<str>>(label: impl Into<String>, categories: &[S]) -> Self {
        let mut a = Self::new(label, -0.5, categories.len() as f64 - 0.5);
        a.kind = ScaleKind::Category;
        a.ticks = Some(
            categories
                .iter()
                .enumerate()
                .map(|(i, c)| Tick::new(i as f64, c.as_ref()))
                .collect(),
        );
        a
    }

    pub fn with_ticks(mut self, ticks: Vec<Tick>) -> Self {
        self.ticks = Some(ticks);
        self
    }

    pub fn with_label_rotation(mut self, degrees: f32) -> Self {
        self.label_rotation = degrees;
        self
    }

    /// Ticks to draw: explicit ones inside the visible range, or nice linear ticks.
    pub fn resolved_ticks(&self) -> Vec<Tick> {
        let (lo, hi) = (self.min.min(self.max), self.min.max(self.max));
        match &self.ticks {
            Some(ticks) => ticks
                .iter()
                .filter(|t| t.value >= lo - 1e-9 && t.value <= hi + 1e-9)
                .cloned()
                .collect(),
            None => nice_ticks(self.min, self.max, 7).into_iter().map(Tick::at).collect(),
        }
    }
}
