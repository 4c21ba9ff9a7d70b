//! EventSubscriber port - Interface for reacting to gym events.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::foundation::{DomainError, EventEnvelope};

/// Handler for processing domain events.
///
/// Handlers should be idempotent: delivery is at-least-once.
///
/// # Example
///
/// ```ignore
/// struct WelcomeMailer { /* ... */ }
///
/// #[async_trait]
/// impl EventHandler for WelcomeMailer {
///     async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError> {
///         let registered: ClientRegistered = event.payload_as()?;
///         // Send a welcome message...
///         Ok(())
///     }
///
///     fn name(&self) -> &'static str {
///         "WelcomeMailer"
///     }
/// }
/// ```
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Process an event.
    async fn handle(&self, event: EventEnvelope) -> Result<(), DomainError>;

    /// Handler name for logging.
    fn name(&self) -> &'static str;
}

/// Port for subscribing to domain events.
///
/// ```ignore
/// subscriber.subscribe("client.enrolled.v1", ledger_projection);
/// subscriber.subscribe_all(&["client.registered.v1", "client.unregistered.v1"], roster_view);
/// ```
pub trait EventSubscriber: Send + Sync {
    /// Subscribe handler to a specific event type.
    fn subscribe(&self, event_type: &str, handler: Arc<dyn EventHandler>);

    /// Subscribe the same handler to several event types.
    fn subscribe_all(&self, event_types: &[&str], handler: Arc<dyn EventHandler>);
}

/// Combined trait for event bus implementations.
pub trait EventBus: super::EventPublisher + EventSubscriber {}

impl<T: super::EventPublisher + EventSubscriber> EventBus for T {}
