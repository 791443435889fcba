use crate::repository::RepositoryEntry;

pub mod fixtures;
pub mod report_tests;

/// Address nothing listens on, for transport failures
pub const UNREACHABLE_ORIGIN: &str = "http://127.0.0.1:1";

pub fn github_widget() -> RepositoryEntry {
    RepositoryEntry::new("https://github.com/acme/widget", "github")
}

pub fn gitlab_widget() -> RepositoryEntry {
    RepositoryEntry::new("https://gitlab.com/acme/widget", "gitlab")
}
