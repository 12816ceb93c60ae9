// File: crates/perf-report/src/lib.rs
// Summary: Benchmark report pipeline: table loading, chart jobs, rendering and the job driver.

pub mod error;
pub mod table;
pub mod styles;
pub mod jobs;
pub mod render;
pub mod summary;
pub mod driver;

pub use driver::{run, run_job, run_jobs, JobOutcome, ReportConfig, RunReport};
pub use error::ReportError;
pub use jobs::{Catalog, ChartJob, Columns, Dataset, Plot, RowFilter};
pub use render::{select_ticks, BarPlan, LinePlan, Renderer};
pub use styles::StyleTable;
pub use table::Table;
