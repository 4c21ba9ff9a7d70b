//! SendNotificationHandler - Command handler for client notifications.

use std::sync::Arc;

use crate::application::SharedGym;
use crate::domain::foundation::{
    format_date, parse_date, CommandMetadata, EventId, SerializableDomainEvent, SessionId,
    Timestamp,
};
use crate::domain::gym::{GymError, NotificationAudience, NotificationSent};
use crate::domain::people::Secretary;
use crate::ports::{Clock, EventPublisher};

/// Who should receive a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationTarget {
    /// Every participant of one session.
    Session(SessionId),
    /// Every participant of every session on a date (`dd-MM-yyyy`), once each.
    Date(String),
    /// Every registered client.
    AllClients,
}

/// Command to send a message to a set of clients.
#[derive(Debug, Clone)]
pub struct SendNotificationCommand {
    pub secretary: Secretary,
    pub target: NotificationTarget,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct SendNotificationResult {
    /// Mailboxes that received the message.
    pub recipients: usize,
    pub event: NotificationSent,
}

/// Handler for sending notifications.
pub struct SendNotificationHandler {
    gym: SharedGym,
    clock: Arc<dyn Clock>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl SendNotificationHandler {
    pub fn new(
        gym: SharedGym,
        clock: Arc<dyn Clock>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            gym,
            clock,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: SendNotificationCommand,
        metadata: CommandMetadata,
    ) -> Result<SendNotificationResult, GymError> {
        let secretary = &cmd.secretary;
        let message = cmd.message.as_str();

        let (recipients, audience) = {
            let mut gym = self.gym.lock().await;
            match &cmd.target {
                NotificationTarget::Session(session_id) => (
                    secretary.notify_session(&mut gym, *session_id, message)?,
                    NotificationAudience::Session {
                        session_id: *session_id,
                    },
                ),
                NotificationTarget::Date(date) => (
                    secretary.notify_date(&mut gym, date, message)?,
                    NotificationAudience::Date {
                        date: format_date(&parse_date(date)?),
                    },
                ),
                NotificationTarget::AllClients => (
                    secretary.notify_all(&mut gym, message)?,
                    NotificationAudience::AllClients,
                ),
            }
        };

        tracing::info!(
            recipients,
            correlation_id = %metadata.correlation_id(),
            "Notification dispatched"
        );

        let event = NotificationSent {
            event_id: EventId::new(),
            secretary_id: secretary.id(),
            audience,
            message: cmd.message.clone(),
            recipients,
            sent_at: Timestamp::from_local(self.clock.now()),
        };
        let envelope = metadata.stamp(event.to_envelope(), secretary.id().to_string());
        self.event_publisher.publish(envelope).await?;

        Ok(SendNotificationResult { recipients, event })
    }
}
