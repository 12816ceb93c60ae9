// File: crates/perf-report/src/summary.rs
// Summary: Per-dataset console summary (VU range, valid counts, maxima).

use std::fmt;

use chart_core::grid::format_tick;

use crate::error::Result;
use crate::table::Table;

#[derive(Clone, Debug, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    pub valid: usize,
    /// Largest valid value, 0.0 when there is none.
    pub max: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DatasetSummary {
    pub title: String,
    pub index_range: Option<(f64, f64)>,
    pub columns: Vec<ColumnSummary>,
}

impl DatasetSummary {
    pub fn of(table: &Table, title: &str) -> Result<Self> {
        let xs: Vec<f64> = table.index_values()?.into_iter().flatten().collect();
        let index_range = if xs.is_empty() {
            None
        } else {
            Some((
                xs.iter().copied().fold(f64::INFINITY, f64::min),
                xs.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            ))
        };
        let columns = table
            .series_names()
            .iter()
            .map(|name| {
                let valid: Vec<f64> = table.column(name).unwrap_or_default().iter().flatten().copied().collect();
                let max = valid.iter().copied().reduce(f64::max).unwrap_or(0.0);
                ColumnSummary { name: name.clone(), valid: valid.len(), max }
            })
            .collect();
        Ok(Self { title: title.to_string(), index_range, columns })
    }
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.title)?;
        match self.index_range {
            Some((lo, hi)) => writeln!(f, "  VU range: {} - {}", format_tick(lo), format_tick(hi))?,
            None => writeln!(f, "  VU range: n/a")?,
        }
        for c in &self.columns {
            writeln!(f, "  {}: {} valid measurements, max = {:.1}", c.name, c.valid, c.max)?;
        }
        Ok(())
    }
}
