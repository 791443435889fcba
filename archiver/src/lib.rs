pub mod batch;
pub mod cli;
pub mod client;
pub mod error;
pub mod report;
pub mod repository;
pub mod response;

#[cfg(test)]
pub mod tests;

// Re-export key types and functions for easier access
pub use crate::batch::{run_batch, BatchSummary};
pub use crate::cli::Cli;
pub use crate::client::{SwhClient, VisitOutcome, SWH_ORIGIN};
pub use crate::error::{ArchiverError, Result};
pub use crate::report::{format_row, report_file_name, Report};
pub use crate::repository::{parse_repositories, read_repositories, RepositoryEntry};
pub use crate::response::{ArchivalResult, SaveResponse};
