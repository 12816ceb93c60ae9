// File: crates/perf-report/src/styles.rs
// Summary: Static series-name -> {color, line pattern, marker} lookup tables.

use chart_core::style::named_color;
use chart_core::{Color, Dash, Marker, SeriesStyle};

type Entry = (&'static str, &'static str, Dash, Marker);

const BASE: &[Entry] = &[
    ("2024 Local", "blue", Dash::Solid, Marker::Circle),
    ("2025 Local", "blue", Dash::Dotted, Marker::Square),
    ("2024 Remote", "red", Dash::Solid, Marker::Circle),
    ("2025 Remote", "red", Dash::Dotted, Marker::Square),
];

const POC: &[Entry] = &[
    ("2025 POC Local", "green", Dash::Solid, Marker::Triangle),
    ("2025 POC Local 2,4", "green", Dash::Dashed, Marker::Diamond),
    ("2025 POC Remote", "orange", Dash::Solid, Marker::Triangle),
    ("2025 POC Remote 2,4", "orange", Dash::Dashed, Marker::Diamond),
];

/// Read-only style lookup, built once per run.
#[derive(Clone, Debug)]
pub struct StyleTable {
    entries: Vec<(&'static str, SeriesStyle)>,
}

impl StyleTable {
    fn from_entries<'a>(sets: impl IntoIterator<Item = &'a [Entry]>) -> Self {
        let entries = sets
            .into_iter()
            .flatten()
            .map(|&(name, color, dash, marker)| {
                let color = named_color(color).unwrap_or(Color::BLACK);
                (name, SeriesStyle::new(color, dash, marker))
            })
            .collect();
        Self { entries }
    }

    /// 2024/2025 Local and Remote runs.
    pub fn base() -> Self {
        Self::from_entries([BASE])
    }

    /// Base entries plus the POC variants.
    pub fn extended() -> Self {
        Self::from_entries([BASE, POC])
    }

    /// Style for `series`; unknown names get black, solid, circle.
    pub fn lookup(&self, series: &str) -> SeriesStyle {
        self.entries
            .iter()
            .find(|(name, _)| *name == series)
            .map(|(_, style)| *style)
            .unwrap_or_default()
    }

    pub fn contains(&self, series: &str) -> bool {
        self.entries.iter().any(|(name, _)| *name == series)
    }
}
