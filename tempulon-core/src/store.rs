use anyhow::{Context, Result};
use std::{fs, io, path::PathBuf};

use crate::Config;

/// The most recent successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastSearchRecord {
    pub location_label: String,
    pub summary_line: String,
}

/// `<city>,<state>` as written to the first line of the record.
pub fn location_label(city: &str, state: &str) -> String {
    format!("{city},{state}")
}

/// Single-slot, two-line text file holding the last search.
#[derive(Debug, Clone)]
pub struct LastSearchStore {
    path: PathBuf,
}

impl LastSearchStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the configured last-search path.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.last_search_path.clone())
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Replace whatever was stored with `location_label` and `summary_line`.
    pub fn save(&self, location_label: &str, summary_line: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create last search directory: {}", parent.display())
            })?;
        }

        fs::write(&self.path, format!("{location_label}\n{summary_line}"))
            .with_context(|| format!("Failed to write last search: {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), "saved last search");
        Ok(())
    }

    /// The stored record, or `None` when the file is missing, short or unreadable.
    pub fn load(&self) -> Option<LastSearchRecord> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "could not read last search");
                return None;
            }
        };

        let mut lines = contents.lines();
        match (lines.next(), lines.next()) {
            (Some(location), Some(summary)) => Some(LastSearchRecord {
                location_label: location.trim().to_string(),
                summary_line: summary.trim().to_string(),
            }),
            _ => {
                tracing::warn!(path = %self.path.display(), "ignoring incomplete last search");
                None
            }
        }
    }
}
