use crate::error::{ArchiverError, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// A repository to archive, as listed in the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryEntry {
    pub url: String,
    /// Kind of hosting (git, svn, hg...), needed by the save endpoint.
    pub service_type: String,
}

impl RepositoryEntry {
    pub fn new(url: impl Into<String>, service_type: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            service_type: service_type.into(),
        }
    }

    /// Parse a `service_type,url` line. Blank lines yield `Ok(None)`.
    ///
    /// Only the first comma separates the fields, values are not unescaped.
    pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        match line.split_once(',') {
            Some((service_type, url)) => Ok(Some(Self::new(url.trim(), service_type.trim()))),
            None => Err(ArchiverError::MalformedLine {
                line_no,
                line: line.to_string(),
            }),
        }
    }
}

pub fn parse_repositories(contents: &str) -> Result<Vec<RepositoryEntry>> {
    let mut repositories = Vec::new();

    for (idx, line) in contents.lines().enumerate() {
        if let Some(entry) = RepositoryEntry::parse_line(line, idx + 1)? {
            debug!(
                "Reading line for ({}) repository {} . . .",
                entry.service_type, entry.url
            );
            repositories.push(entry);
        }
    }

    debug!("Read {} repositories.", repositories.len());
    Ok(repositories)
}

pub fn read_repositories<P: AsRef<Path>>(path: P) -> Result<Vec<RepositoryEntry>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ArchiverError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    parse_repositories(&contents)
}
