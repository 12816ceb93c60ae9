// File: crates/perf-report/src/main.rs
// Summary: Renders the benchmark chart catalog from ./data into ./charts.

use anyhow::Result;
use chart_core::RenderOptions;
use perf_report::ReportConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    let config = ReportConfig::default();
    perf_report::run(&config, RenderOptions::default());
    Ok(())
}
