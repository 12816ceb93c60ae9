// File: crates/perf-report/src/driver.rs
// Summary: Runs a job catalog sequentially, isolating failures per job.

use std::path::PathBuf;

use chart_core::RenderOptions;
use tracing::{info, warn};

use crate::error::Result;
use crate::jobs::{Catalog, ChartJob, Plot};
use crate::render::Renderer;
use crate::summary::DatasetSummary;
use crate::table::Table;

/// Where inputs are read from and charts written to.
#[derive(Clone, Debug)]
pub struct ReportConfig {
    /// Job input paths are resolved against this directory.
    pub data_root: PathBuf,
    pub charts_dir: PathBuf,
    pub catalog: Catalog,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { data_root: PathBuf::from("."), charts_dir: PathBuf::from("charts"), catalog: Catalog::default() }
    }
}

impl ReportConfig {
    pub fn input_path(&self, input: &str) -> PathBuf {
        self.data_root.join(input)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JobOutcome {
    Saved(PathBuf),
    MissingInput(PathBuf),
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct RunReport {
    /// (output file, outcome) in job order.
    pub outcomes: Vec<(String, JobOutcome)>,
}

impl RunReport {
    pub fn saved(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| matches!(o, JobOutcome::Saved(_))).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.saved()
    }

    pub fn outcome(&self, out_file: &str) -> Option<&JobOutcome> {
        self.outcomes.iter().find(|(f, _)| f == out_file).map(|(_, o)| o)
    }
}

/// Load, filter and render one job.
pub fn run_job(job: &ChartJob, config: &ReportConfig, renderer: &Renderer) -> Result<PathBuf> {
    let input = config.input_path(&job.input);
    match &job.plot {
        Plot::Lines { columns, filter } => {
            let mut table = Table::load(&input)?;
            if let Some(f) = filter {
                f.apply(&mut table);
            }
            let columns = columns.resolve(&table);
            let (path, _) = renderer.render_lines(&table, &job.title, &job.y_label, &job.out_file, &columns)?;
            Ok(path)
        }
        Plot::Bar => {
            let (path, _) = renderer.render_bar(&input, &job.title, &job.y_label, &job.out_file)?;
            Ok(path)
        }
    }
}

/// Run `jobs` in order. A failing job is reported and skipped; the rest still run.
pub fn run_jobs(jobs: &[ChartJob], config: &ReportConfig, renderer: &Renderer) -> RunReport {
    let mut report = RunReport::default();
    for job in jobs {
        println!();
        println!("{}", job.progress_line());
        info!(input = %job.input, out = %job.out_file, "chart job");
        let outcome = match run_job(job, config, renderer) {
            Ok(path) => JobOutcome::Saved(path),
            Err(e) if e.is_not_found() => {
                let input = config.input_path(&job.input);
                println!("Warning: File not found: {}", input.display());
                warn!(input = %input.display(), "input missing; job skipped");
                JobOutcome::MissingInput(input)
            }
            Err(e) => {
                println!("Error generating chart '{}': {}", job.out_file, e);
                warn!(out = %job.out_file, error = %e, "job failed");
                JobOutcome::Failed(e.to_string())
            }
        };
        report.outcomes.push((job.out_file.clone(), outcome));
    }
    report
}

/// Summaries for every catalog dataset that loads; unreadable inputs are skipped.
pub fn summarize(config: &ReportConfig) -> Vec<DatasetSummary> {
    config
        .catalog
        .datasets()
        .iter()
        .filter_map(|ds| {
            let table = Table::load(config.input_path(ds.input)).ok()?;
            DatasetSummary::of(&table, ds.title).ok()
        })
        .collect()
}

/// Full run: banner, every catalog job, completion banner, data summary.
pub fn run(config: &ReportConfig, options: RenderOptions) -> RunReport {
    let renderer = Renderer::new(config.charts_dir.clone(), config.catalog.styles()).with_options(options);
    let jobs = config.catalog.jobs();

    println!("Generating performance charts...");
    let report = run_jobs(&jobs, config, &renderer);
    println!();
    println!("Chart generation complete! ({} saved, {} skipped)", report.saved(), report.failed());
    println!("Charts saved in the '{}' directory", config.charts_dir.display());
    println!("Generated charts:");
    for group in config.catalog.chart_groups() {
        println!("- {group}");
    }

    println!();
    println!("{}", "=".repeat(50));
    println!("DATA SUMMARY");
    println!("{}", "=".repeat(50));
    for s in summarize(config) {
        println!();
        print!("{s}");
    }
    report
}
