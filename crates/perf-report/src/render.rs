// File: crates/perf-report/src/render.rs
// Summary: Turns loaded tables into line/bar charts and writes them under the charts directory.
// Notes:
// - Planning (which series, points, ticks, range) is kept apart from drawing so it can be
//   checked without decoding images.
// - Each call builds a fresh `Chart`; the surface lives only inside `render_to_png`.

use std::path::{Path, PathBuf};

use chart_core::{Axis, Chart, RenderOptions, Series, SeriesStyle, Theme, Tick};
use tracing::debug;

use crate::error::{ReportError, Result};
use crate::styles::StyleTable;
use crate::table::Table;

pub const X_LABEL: &str = "Virtual Users (VUs)";
/// Up to this many covered x-values are all ticked; above it every second one.
pub const MAX_DENSE_TICKS: usize = 8;
pub const X_PAD_LOW: f64 = 0.8;
pub const X_PAD_HIGH: f64 = 1.2;
pub const Y_MARGIN: f64 = 0.05;
pub const BAR_LABEL_ROTATION: f32 = 30.0;

/// One series that will be drawn.
#[derive(Clone, Debug)]
pub struct PlannedSeries {
    pub name: String,
    /// (x, y) in ascending x.
    pub points: Vec<(f64, f64)>,
    pub style: SeriesStyle,
}

/// Everything a line chart needs, derived from a table and the requested columns.
#[derive(Clone, Debug)]
pub struct LinePlan {
    pub series: Vec<PlannedSeries>,
    /// Distinct x-values with at least one plotted point, ascending.
    pub covered: Vec<f64>,
    pub ticks: Vec<f64>,
    pub x_range: (f64, f64),
}

/// Tick selection over sorted distinct values: all of them up to
/// `MAX_DENSE_TICKS`, otherwise every second one starting with the first.
pub fn select_ticks(sorted: &[f64]) -> Vec<f64> {
    if sorted.len() <= MAX_DENSE_TICKS {
        sorted.to_vec()
    } else {
        sorted.iter().step_by(2).copied().collect()
    }
}

impl LinePlan {
    pub fn build(table: &Table, columns: &[String], styles: &StyleTable) -> Result<Self> {
        let xs = table.index_values()?;
        let mut series = Vec::new();
        let mut covered = Vec::new();

        for name in columns {
            let Some(values) = table.column(name) else {
                debug!(series = %name, "not in table; skipped");
                continue;
            };
            // log axis: only positive x can be placed
            let mut points: Vec<(f64, f64)> = xs
                .iter()
                .zip(values)
                .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
                .filter(|(x, _)| *x > 0.0)
                .collect();
            if points.is_empty() {
                debug!(series = %name, "no valid rows; skipped");
                continue;
            }
            covered.extend(points.iter().map(|p| p.0));
            points.sort_by(|a, b| a.0.total_cmp(&b.0));
            series.push(PlannedSeries { name: name.clone(), points, style: styles.lookup(name) });
        }

        covered.sort_by(f64::total_cmp);
        covered.dedup();

        let (ticks, x_range) = if let (Some(&lo), Some(&hi)) = (covered.first(), covered.last()) {
            (select_ticks(&covered), (lo * X_PAD_LOW, hi * X_PAD_HIGH))
        } else {
            // nothing drawn: every second raw index value, in table order
            let ticks: Vec<f64> = xs
                .iter()
                .step_by(2)
                .filter_map(|x| *x)
                .filter(|x| *x > 0.0)
                .collect();
            let lo = ticks.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = ticks.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let range = if lo.is_finite() { (lo * X_PAD_LOW, hi * X_PAD_HIGH) } else { (1.0, 10.0) };
            (ticks, range)
        };
        debug!(drawn = series.len(), ?ticks, ?x_range, "line plan");

        Ok(Self { series, covered, ticks, x_range })
    }

    /// Names that will appear in the legend.
    pub fn legend(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn to_chart(&self, title: &str, y_label: &str) -> Chart {
        let mut chart = Chart::new().with_title(title);
        for s in &self.series {
            chart.add_series(Series::line(s.name.clone(), s.points.clone(), s.style));
        }
        chart.x_axis = Axis::log10(X_LABEL, self.x_range.0, self.x_range.1)
            .with_ticks(self.ticks.iter().map(|&v| Tick::at(v)).collect());
        chart.y_axis = Axis::new(y_label, 0.0, 1.0);
        chart.autoscale_y(Y_MARGIN);
        chart.legend = true;
        chart
    }
}

/// Categorical bars: trimmed labels in file order with their values.
#[derive(Clone, Debug, PartialEq)]
pub struct BarPlan {
    pub category_column: String,
    pub value_column: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl BarPlan {
    /// Uses the first numeric column; rows where it is missing are dropped.
    pub fn build(table: &Table) -> Result<Self> {
        let value_column = table
            .series_names()
            .first()
            .cloned()
            .ok_or_else(|| ReportError::NoValueColumn(table.source().to_path_buf()))?;
        let mut labels = Vec::new();
        let mut values = Vec::new();
        for at in 0..table.len() {
            let Some(row) = table.row(at) else { continue };
            let Some(v) = row.get(&value_column) else {
                debug!(row = at, "missing value; bar dropped");
                continue;
            };
            labels.push(row.index().unwrap_or("").trim().to_string());
            values.push(v);
        }
        Ok(Self { category_column: table.index_name().to_string(), value_column, labels, values })
    }

    /// One palette hue per bar, cycling past the palette length.
    pub fn to_chart(&self, title: &str, y_label: &str, theme: &Theme) -> Chart {
        let colors = (0..self.values.len()).map(|i| theme.palette_color(i)).collect();
        let mut chart = Chart::new().with_title(title);
        chart.add_series(Series::bars(self.value_column.clone(), &self.values, colors));
        chart.x_axis = Axis::category(self.category_column.clone(), &self.labels).with_label_rotation(BAR_LABEL_ROTATION);
        chart.y_axis = Axis::new(y_label, 0.0, 1.0);
        chart.autoscale_y(Y_MARGIN);
        chart
    }
}

/// Writes charts into one output directory with a fixed style table and render options.
pub struct Renderer {
    charts_dir: PathBuf,
    styles: StyleTable,
    options: RenderOptions,
}

impl Renderer {
    pub fn new(charts_dir: impl Into<PathBuf>, styles: StyleTable) -> Self {
        Self { charts_dir: charts_dir.into(), styles, options: RenderOptions::default() }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    /// Line chart of `columns` against the index column on a log x axis.
    /// Returns the written path and the plan it was drawn from.
    pub fn render_lines(
        &self,
        table: &Table,
        title: &str,
        y_label: &str,
        out_file: &str,
        columns: &[String],
    ) -> Result<(PathBuf, LinePlan)> {
        let plan = LinePlan::build(table, columns, &self.styles)?;
        let path = self.save(&plan.to_chart(title, y_label), out_file)?;
        Ok((path, plan))
    }

    /// Bar chart of the first numeric column of the table at `input`, one bar per label.
    pub fn render_bar(
        &self,
        input: &Path,
        title: &str,
        y_label: &str,
        out_file: &str,
    ) -> Result<(PathBuf, BarPlan)> {
        let table = Table::load(input)?;
        let plan = BarPlan::build(&table)?;
        let chart = plan.to_chart(title, y_label, &self.options.theme);
        let path = self.save(&chart, out_file)?;
        Ok((path, plan))
    }

    fn save(&self, chart: &Chart, out_file: &str) -> Result<PathBuf> {
        let path = self.charts_dir.join(out_file);
        chart.render_to_png(&self.options, &path)?;
        println!("Saved chart: {}", out_file);
        Ok(path)
    }
}
