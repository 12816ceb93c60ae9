// File: crates/perf-report/src/table.rs
// Summary: Loads a comma-separated benchmark table, normalizing missing markers.
// Notes:
// - The first column is the independent variable (`VUs`, `Version`) and keeps its text.
// - Every other column is numeric; cells that are `NA`, empty, non-finite or
//   unparsable become `None`. Coercion never fails a load.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ReportError, Result};

/// Literal cell values treated as missing before any coercion.
pub const MISSING_MARKERS: [&str; 2] = ["NA", ""];

fn is_missing(raw: &str) -> bool {
    MISSING_MARKERS.contains(&raw)
}

/// Per-cell numeric coercion; anything that is not a finite number is missing.
pub fn coerce_number(raw: &str) -> Option<f64> {
    if is_missing(raw) {
        return None;
    }
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Column-oriented table: one index column plus numeric series columns.
#[derive(Clone, Debug)]
pub struct Table {
    source: PathBuf,
    headers: Vec<String>,
    index: Vec<Option<String>>,
    columns: Vec<Vec<Option<f64>>>,
}

/// Borrowed view of one row.
#[derive(Clone, Copy, Debug)]
pub struct Row<'a> {
    table: &'a Table,
    at: usize,
}

impl<'a> Row<'a> {
    /// Raw index cell, `None` when missing.
    pub fn index(&self) -> Option<&'a str> {
        self.table.index[self.at].as_deref()
    }

    /// Value of series `name`; `None` when missing or the column does not exist.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.table.column(name).and_then(|c| c[self.at])
    }
}

impl Table {
    /// Load `path`. Fails with `NotFound` when the file does not exist and with
    /// `Parse` when it is not well-formed delimited text.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ReportError::NotFound(path.to_path_buf()),
            _ => ReportError::Io { path: path.to_path_buf(), source: e },
        })?;
        Self::from_reader(file, path)
    }

    /// Parse CSV text from `rdr`; `source` is used in errors.
    pub fn from_reader<R: Read>(rdr: R, source: &Path) -> Result<Self> {
        let parse_err = |e: csv::Error| ReportError::Parse { path: source.to_path_buf(), source: e };

        let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(rdr);
        let headers: Vec<String> = rdr.headers().map_err(parse_err)?.iter().map(str::to_string).collect();
        if headers.is_empty() || (headers.len() == 1 && headers[0].is_empty()) {
            return Err(ReportError::MissingHeader(source.to_path_buf()));
        }

        let mut index = Vec::new();
        let mut columns = vec![Vec::new(); headers.len() - 1];
        for rec in rdr.records() {
            let rec = rec.map_err(parse_err)?;
            let first = rec.get(0).unwrap_or("");
            index.push(if is_missing(first) { None } else { Some(first.to_string()) });
            for (i, col) in columns.iter_mut().enumerate() {
                col.push(rec.get(i + 1).and_then(coerce_number));
            }
        }
        debug!(source = %source.display(), rows = index.len(), columns = headers.len(), "loaded table");

        Ok(Self { source: source.to_path_buf(), headers, index, columns })
    }

    pub fn source(&self) -> &Path { &self.source }

    pub fn len(&self) -> usize { self.index.len() }

    pub fn is_empty(&self) -> bool { self.index.is_empty() }

    pub fn headers(&self) -> &[String] { &self.headers }

    /// Name of the independent-variable column.
    pub fn index_name(&self) -> &str { &self.headers[0] }

    /// Numeric column names in file order.
    pub fn series_names(&self) -> &[String] { &self.headers[1..] }

    pub fn has_column(&self, name: &str) -> bool {
        self.series_names().iter().any(|h| h == name)
    }

    /// Values of series `name` in row order.
    pub fn column(&self, name: &str) -> Option<&[Option<f64>]> {
        let at = self.series_names().iter().position(|h| h == name)?;
        Some(&self.columns[at])
    }

    pub fn row(&self, at: usize) -> Option<Row<'_>> {
        (at < self.len()).then_some(Row { table: self, at })
    }

    /// Raw index label of row `at`.
    pub fn index_label(&self, at: usize) -> Option<&str> {
        self.index.get(at).and_then(|v| v.as_deref())
    }

    /// Index value of row `at` as a number. Missing cells give `Ok(None)`;
    /// text that is not a number is an error.
    pub fn index_value(&self, at: usize) -> Result<Option<f64>> {
        match self.index_label(at) {
            None => Ok(None),
            Some(raw) => match raw.trim().parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(Some(v)),
                _ => Err(ReportError::NonNumericIndex {
                    column: self.index_name().to_string(),
                    row: at,
                    value: raw.to_string(),
                }),
            },
        }
    }

    /// All index values in row order, missing ones as `None`.
    pub fn index_values(&self) -> Result<Vec<Option<f64>>> {
        (0..self.len()).map(|i| self.index_value(i)).collect()
    }

    /// Remove the last `n` rows (all of them when `n >= len`).
    pub fn drop_last(&mut self, n: usize) {
        let keep = self.len().saturating_sub(n);
        self.index.truncate(keep);
        for col in &mut self.columns {
            col.truncate(keep);
        }
    }
}
