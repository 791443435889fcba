use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ArchiverError>;

/// Failures that stop a run. Per-repository failures are reported in the
/// report file instead and never surface here.
#[derive(Debug, Error)]
pub enum ArchiverError {
    #[error("Failed to read repositories file {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed repository line {line_no}: expected `service_type,url` but got {line:?}")]
    MalformedLine { line_no: usize, line: String },

    #[error("Failed to write report {path}: {source}")]
    Report {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
