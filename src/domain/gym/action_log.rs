//! Append-only audit trail of administrative events.

use serde::{Deserialize, Serialize};

/// Ordered, human-readable record of everything the facility has done.
///
/// Entries are only ever appended; the public surface is read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionLog(Vec<String>);

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, entry: impl Into<String>) {
        let entry = entry.into();
        tracing::debug!(entry = %entry, "Action recorded");
        self.0.push(entry);
    }

    pub fn entries(&self) -> &[String] {
        &self.0
    }

    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Exports the log as a JSON array of strings.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.0)
    }
}
