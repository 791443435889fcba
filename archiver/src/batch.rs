use crate::client::{SwhClient, VisitOutcome};
use crate::error::Result;
use crate::report::Report;
use crate::repository::RepositoryEntry;
use log::{debug, error, info};
use std::io::Write;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    /// Entries already visited, whose save status was polled.
    pub polled: usize,
    /// Entries for which a new save request was submitted.
    pub archived: usize,
    /// Entries whose final call did not return 200.
    pub failed: usize,
}

/// Process every entry once, in order, writing one report row each.
///
/// Per-entry failures are logged and reported; only a failed report write
/// stops the batch.
pub fn run_batch<W: Write>(
    client: &SwhClient,
    entries: &[RepositoryEntry],
    report: &mut Report<W>,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();

    for entry in entries {
        let result = match client.latest_visit(entry) {
            VisitOutcome::Visited => {
                summary.polled += 1;
                let result = client.save_status(entry);
                if !result.is_success() {
                    error!(
                        "[get_status]: Non successful status for {}({}) - {}",
                        result.url,
                        result.service_type,
                        result.save_request_status.as_deref().unwrap_or("None")
                    );
                }
                result
            }
            VisitOutcome::NotVisited(_) | VisitOutcome::Unreachable(_) => {
                summary.archived += 1;
                let result = client.request_save(entry);
                if !result.is_success() {
                    error!(
                        "[archive]: Non successful archive for {}({}) - {}",
                        result.url,
                        result.service_type,
                        result.save_request_status.as_deref().unwrap_or("None")
                    );
                }
                result
            }
        };

        debug!("Result for {}: {}", entry.url, result.to_json());
        if !result.is_success() {
            summary.failed += 1;
        }
        report.write(&result)?;
        summary.processed += 1;
    }

    info!(
        "Processed {} repositories ({} polled, {} archive requests, {} unsuccessful), report at {}",
        summary.processed,
        summary.polled,
        summary.archived,
        summary.failed,
        report.path().display()
    );
    Ok(summary)
}
