//! Command infrastructure for application handlers.
//!
//! `CommandMetadata` is the context that flows through command processing and
//! into every envelope a handler publishes, instead of each handler taking
//! loose `correlation_id`/`source` parameters.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::EventEnvelope;

/// Metadata context for command handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    /// Links related operations across a single request.
    #[serde(skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,

    /// Source of this command (e.g., "front_desk", "scheduler").
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
}

impl CommandMetadata {
    /// Creates empty command metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: Add correlation ID for request tracing.
    pub fn with_correlation_id(mut self, id: impl Into<String>) -> Self {
        self.correlation_id = Some(id.into());
        self
    }

    /// Builder: Add source identifier.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Returns the correlation ID, generating one if not set.
    pub fn correlation_id(&self) -> String {
        self.correlation_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string())
    }

    /// Returns the source if set.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Stamps an outgoing envelope with this command's context and actor.
    pub fn stamp(&self, envelope: EventEnvelope, actor_id: impl Into<String>) -> EventEnvelope {
        let envelope = envelope
            .with_correlation_id(self.correlation_id())
            .with_actor_id(actor_id);
        match &self.source {
            Some(source) => envelope.with_source(source.clone()),
            None => envelope,
        }
    }
}

#[cfg(test)]
impl CommandMetadata {
    /// Creates a test fixture with fixed correlation and source.
    pub fn test_fixture() -> Self {
        Self::new()
            .with_correlation_id("test-correlation-id")
            .with_source("test")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_is_empty() {
        let metadata = CommandMetadata::new();
        assert!(metadata.correlation_id.is_none());
        assert!(metadata.source().is_none());
    }

    #[test]
    fn correlation_id_generates_if_missing() {
        let metadata = CommandMetadata::new();
        assert!(!metadata.correlation_id().is_empty());
    }

    #[test]
    fn correlation_id_returns_set_value() {
        let metadata = CommandMetadata::new().with_correlation_id("corr-123");
        assert_eq!(metadata.correlation_id(), "corr-123");
    }

    #[test]
    fn stamp_copies_context_into_envelope() {
        let envelope = EventEnvelope::new("client.registered.v1", "1111", "Client", json!({}));
        let stamped = CommandMetadata::test_fixture().stamp(envelope, "2222");

        assert_eq!(
            stamped.metadata.correlation_id.as_deref(),
            Some("test-correlation-id")
        );
        assert_eq!(stamped.metadata.actor_id.as_deref(), Some("2222"));
        assert_eq!(stamped.metadata.source.as_deref(), Some("test"));
    }

    #[test]
    fn stamp_without_source_leaves_source_empty() {
        let envelope = EventEnvelope::new("client.registered.v1", "1111", "Client", json!({}));
        let stamped = CommandMetadata::new().stamp(envelope, "2222");
        assert!(stamped.metadata.source.is_none());
    }
}
