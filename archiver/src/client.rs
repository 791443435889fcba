use crate::repository::RepositoryEntry;
use crate::response::{ArchivalResult, SaveResponse};
use log::{error, info};
use reqwest::blocking::{Client, RequestBuilder};

pub const SWH_ORIGIN: &str = "https://archive.softwareheritage.org";

/// Result of looking up the latest visit of an origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisitOutcome {
    Visited,
    NotVisited(u16),
    Unreachable(String),
}

impl VisitOutcome {
    fn from_status(status: u16) -> Self {
        if status == 200 {
            VisitOutcome::Visited
        } else {
            VisitOutcome::NotVisited(status)
        }
    }

    /// HTTP status of the lookup, `-1` when no response was received.
    pub fn status_code(&self) -> i32 {
        match self {
            VisitOutcome::Visited => 200,
            VisitOutcome::NotVisited(status) => i32::from(*status),
            VisitOutcome::Unreachable(_) => -1,
        }
    }
}

/// Client for the Software Heritage origin and save-request API.
///
/// Every call is a single attempt. Redirects are followed, timeouts are the
/// HTTP stack's defaults.
pub struct SwhClient {
    http: Client,
    origin: String,
}

impl Default for SwhClient {
    fn default() -> Self {
        Self::new(SWH_ORIGIN)
    }
}

impl SwhClient {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            origin: origin.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn visit_url(&self, url: &str) -> String {
        format!("{}/api/1/origin/{}/visit/latest/", self.origin, url)
    }

    pub fn save_url(&self, service_type: &str, url: &str) -> String {
        format!(
            "{}/api/1/origin/save/{}/url/{}/",
            self.origin, service_type, url
        )
    }

    /// Check whether the archive has visited `entry` before.
    pub fn latest_visit(&self, entry: &RepositoryEntry) -> VisitOutcome {
        info!("[visit]: Visiting {} . . .", entry.url);

        match send(self.http.get(self.visit_url(&entry.url))) {
            Ok((status, body)) => {
                info!("[visit]: Visited {} and got {}", entry.url, body);
                VisitOutcome::from_status(status)
            }
            Err(e) => {
                error!("[visit]: Visited {} and got exception {}", entry.url, e);
                VisitOutcome::Unreachable(e.to_string())
            }
        }
    }

    /// Submit a new save request for `entry`.
    pub fn request_save(&self, entry: &RepositoryEntry) -> ArchivalResult {
        info!(
            "[archive]: Archiving {}({}) . . .",
            entry.url, entry.service_type
        );

        let request = self
            .http
            .post(self.save_url(&entry.service_type, &entry.url));
        match send(request) {
            Ok((status, body)) => {
                info!("[archive]: Archived {} and got {}", entry.url, body);
                ArchivalResult::from_response(entry, status, &body, SaveResponse::Requested)
            }
            Err(e) => {
                error!(
                    "[archive]: Error for {}({}) - {}",
                    entry.url, entry.service_type, e
                );
                ArchivalResult::transport_failure(entry, e.to_string())
            }
        }
    }

    /// Fetch the most recent save request for `entry`.
    pub fn save_status(&self, entry: &RepositoryEntry) -> ArchivalResult {
        info!(
            "[get_status]: Retrieving info for {}({}) . . .",
            entry.url, entry.service_type
        );

        let request = self.http.get(self.save_url(&entry.service_type, &entry.url));
        match send(request) {
            Ok((status, body)) => {
                info!("[get_status]: {} and got {}", entry.url, body);
                ArchivalResult::from_response(entry, status, &body, SaveResponse::Polled)
            }
            Err(e) => {
                error!(
                    "[get_status]: Error for {}({}) - {}",
                    entry.url, entry.service_type, e
                );
                ArchivalResult::transport_failure(entry, e.to_string())
            }
        }
    }
}

fn send(request: RequestBuilder) -> reqwest::Result<(u16, String)> {
    let response = request.send()?;
    let status = response.status().as_u16();
    let body = response.text()?;
    Ok((status, body))
}
