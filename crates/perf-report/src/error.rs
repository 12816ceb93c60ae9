// File: crates/perf-report/src/error.rs
// Summary: Error type shared by the loader, renderer and job driver.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{} has no header row", .0.display())]
    MissingHeader(PathBuf),

    #[error("{} has no numeric column", .0.display())]
    NoValueColumn(PathBuf),

    #[error("row {row}: '{value}' in column '{column}' is not a number")]
    NonNumericIndex { column: String, row: usize, value: String },

    #[error(transparent)]
    Render(#[from] anyhow::Error),
}

impl ReportError {
    /// True for the "input file does not exist" failure kind.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ReportError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
