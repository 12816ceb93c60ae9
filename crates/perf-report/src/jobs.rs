// File: crates/perf-report/src/jobs.rs
// Summary: Chart job descriptors and the two fixed job catalogs.

use crate::styles::StyleTable;
use crate::table::Table;

/// Which series a line job plots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Columns {
    /// Every column except the index, in file order.
    All,
    Only(Vec<String>),
}

impl Columns {
    pub fn only<S: AsRef<str>>(names: &[S]) -> Self {
        Columns::Only(names.iter().map(|s| s.as_ref().to_string()).collect())
    }

    /// Concrete column names for `table`.
    pub fn resolve(&self, table: &Table) -> Vec<String> {
        match self {
            Columns::All => table.series_names().to_vec(),
            Columns::Only(names) => names.clone(),
        }
    }
}

/// Row policy applied after loading and before rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowFilter {
    /// Drop the trailing `n` rows (highest load levels).
    DropLast(usize),
}

impl RowFilter {
    pub fn apply(&self, table: &mut Table) {
        match *self {
            RowFilter::DropLast(n) => table.drop_last(n),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Plot {
    Lines { columns: Columns, filter: Option<RowFilter> },
    /// Categorical bars over the first numeric column.
    Bar,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartJob {
    /// Input path relative to the data root.
    pub input: String,
    pub title: String,
    pub y_label: String,
    pub out_file: String,
    pub plot: Plot,
}

impl ChartJob {
    pub fn lines(dataset: &Dataset, title: impl Into<String>, out_file: impl Into<String>, columns: Columns) -> Self {
        Self {
            input: dataset.input.to_string(),
            title: title.into(),
            y_label: dataset.y_label.to_string(),
            out_file: out_file.into(),
            plot: Plot::Lines { columns, filter: None },
        }
    }

    /// Console line printed before the job runs.
    pub fn progress_line(&self) -> String {
        format!("Processing {}...", self.title)
    }

    pub fn with_filter(mut self, f: RowFilter) -> Self {
        if let Plot::Lines { filter, .. } = &mut self.plot {
            *filter = Some(f);
        }
        self
    }
}

/// A line-chart input with its base title, y label and base output name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dataset {
    pub input: &'static str,
    pub title: &'static str,
    pub y_label: &'static str,
    pub out_file: &'static str,
}

impl Dataset {
    /// Chart of every series in the file.
    pub fn all_series(&self) -> ChartJob {
        ChartJob::lines(self, self.title, self.out_file, Columns::All)
    }

    /// `<year> Local` vs `<year> Remote`, titled and named after the year.
    pub fn year(&self, year: u16) -> ChartJob {
        let columns = Columns::only(&[format!("{year} Local"), format!("{year} Remote")]);
        ChartJob::lines(
            self,
            format!("{} - {year} (Local vs Remote)", self.title),
            self.suffixed(&year.to_string()),
            columns,
        )
    }

    /// Output name with `_<suffix>` inserted before `.png`.
    pub fn suffixed(&self, suffix: &str) -> String {
        match self.out_file.strip_suffix(".png") {
            Some(stem) => format!("{stem}_{suffix}.png"),
            None => format!("{}_{suffix}", self.out_file),
        }
    }
}

pub const TPS: Dataset = Dataset {
    input: "data/tps.csv",
    title: "Transactions Per Second (TPS) by Virtual Users",
    y_label: "TPS",
    out_file: "tps_chart.png",
};

pub const OUTGOING_REQUESTS: Dataset = Dataset {
    input: "data/outgoing_created_request_per_second.csv",
    title: "Outgoing Created Requests Per Second by Virtual Users",
    y_label: "Requests/Second",
    out_file: "outgoing_requests_chart.png",
};

pub const ITERATIONS: Dataset = Dataset {
    input: "data/iterations_per_second.csv",
    title: "Iterations Per Second by Virtual Users",
    y_label: "Iterations/Second",
    out_file: "iterations_chart.png",
};

pub const HTTP_REQUESTS: Dataset = Dataset {
    input: "data/http_requests_per_second.csv",
    title: "HTTP Requests Per Second by Virtual Users",
    y_label: "HTTP Requests/Second",
    out_file: "http_requests_chart.png",
};

pub const ITERATION_DURATION: Dataset = Dataset {
    input: "data/avg_iteration_duration_ms.csv",
    title: "Average Iteration Duration by Virtual Users",
    y_label: "Avg Iteration Duration (ms)",
    out_file: "avg_iteration_duration_chart.png",
};

pub const MAX_VUS_INPUT: &str = "data/max-vus.csv";

/// The two job lists found in the field. They differ in which charts are
/// produced and in the style table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Catalog {
    /// Rate datasets: all-series plus per-year Local vs Remote charts.
    Combined,
    /// Combined plus latency, POC comparisons and the max-VUs bar chart.
    #[default]
    Comparison,
}

impl Catalog {
    /// Line-chart inputs in catalog order.
    pub fn datasets(&self) -> &'static [Dataset] {
        match self {
            Catalog::Combined => &[TPS, OUTGOING_REQUESTS, ITERATIONS, HTTP_REQUESTS],
            Catalog::Comparison => &[TPS, OUTGOING_REQUESTS, ITERATIONS, HTTP_REQUESTS, ITERATION_DURATION],
        }
    }

    pub fn styles(&self) -> StyleTable {
        match self {
            Catalog::Combined => StyleTable::base(),
            Catalog::Comparison => StyleTable::extended(),
        }
    }

    /// Chart groups listed in the completion banner.
    pub fn chart_groups(&self) -> &'static [&'static str] {
        match self {
            Catalog::Combined => &[
                "Original charts (all years/types combined)",
                "2024 charts (Local vs Remote)",
                "2025 charts (Local vs Remote)",
            ],
            Catalog::Comparison => &[
                "Original charts (all years/types combined)",
                "2024 charts (Local vs Remote)",
                "2025 charts (Local vs Remote)",
                "2025 Local vs POC charts",
                "TPS 2025 Remote vs POC Remote 2,4 (two highest loads dropped)",
                "Maximum VUs by version (bar)",
            ],
        }
    }

    pub fn jobs(&self) -> Vec<ChartJob> {
        let mut jobs = Vec::new();
        for ds in self.datasets() {
            jobs.push(ds.all_series());
            jobs.push(ds.year(2024));
            jobs.push(ds.year(2025));
            if *self == Catalog::Comparison {
                jobs.push(ChartJob::lines(
                    ds,
                    format!("{} - 2025 Local vs POC", ds.title),
                    ds.suffixed("poc_local"),
                    Columns::only(&["2025 Local", "2025 POC Local", "2025 POC Local 2,4"]),
                ));
            }
        }
        if *self == Catalog::Comparison {
            // the 2,4 remote run did not reach the two highest load levels
            jobs.push(
                ChartJob::lines(
                    &TPS,
                    format!("{} - 2025 Remote vs POC Remote 2,4", TPS.title),
                    TPS.suffixed("poc_remote"),
                    Columns::only(&["2025 Remote", "2025 POC Remote 2,4"]),
                )
                .with_filter(RowFilter::DropLast(2)),
            );
            jobs.push(ChartJob {
                input: MAX_VUS_INPUT.to_string(),
                title: "Maximum VUs Achieved by Version (Local)".to_string(),
                y_label: "Max VUs".to_string(),
                out_file: "max_vus_chart.png".to_string(),
                plot: Plot::Bar,
            });
        }
        jobs
    }
}
