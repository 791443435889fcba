use crate::error::{ArchiverError, Result};
use crate::response::ArchivalResult;
use chrono::{DateTime, Utc};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Report file name for a run started at `started_at`, e.g.
/// `results.txt-2024-03-01T12:30:05`.
pub fn report_file_name(prefix: &str, started_at: DateTime<Utc>) -> String {
    format!("{}-{}", prefix, started_at.format("%Y-%m-%dT%H:%M:%S"))
}

/// One line per result:
/// `request_id,url,service_type,save_request_status,save_task_status,save_request_date`.
///
/// Missing values are written as `None`. Commas inside values are not escaped.
pub fn format_row(result: &ArchivalResult) -> String {
    let cell = |value: &Option<String>| value.as_deref().unwrap_or("None").to_string();
    [
        cell(&result.request_id),
        result.url.clone(),
        result.service_type.clone(),
        cell(&result.save_request_status),
        cell(&result.save_task_status),
        cell(&result.save_request_date),
    ]
    .join(",")
}

pub struct Report<W: Write> {
    out: W,
    path: PathBuf,
    rows: usize,
}

impl Report<File> {
    /// Create the report file, truncating any previous content.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let out = File::create(&path).map_err(|source| ArchiverError::Report {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            out,
            path,
            rows: 0,
        })
    }
}

impl<W: Write> Report<W> {
    pub fn new(out: W, path: impl Into<PathBuf>) -> Self {
        Self {
            out,
            path: path.into(),
            rows: 0,
        }
    }

    /// Append a row and flush it, so an interrupted run keeps whole rows only.
    pub fn write(&mut self, result: &ArchivalResult) -> Result<()> {
        writeln!(self.out, "{}", format_row(result))
            .and_then(|_| self.out.flush())
            .map_err(|source| ArchiverError::Report {
                path: self.path.clone(),
                source,
            })?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
