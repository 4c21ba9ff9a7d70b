//! AppointSecretaryHandler - Command handler for replacing the administrator.

use std::sync::Arc;

use crate::application::{PersonDetails, SharedGym};
use crate::domain::foundation::{CommandMetadata, EventId, SerializableDomainEvent, Timestamp};
use crate::domain::gym::{GymError, SecretaryAppointed};
use crate::domain::people::Secretary;
use crate::ports::{Clock, EventPublisher};

/// Command to appoint a new secretary.
///
/// Needs no acting secretary: appointment is how the first one is created.
#[derive(Debug, Clone)]
pub struct AppointSecretaryCommand {
    pub secretary: PersonDetails,
    pub salary: i64,
}

#[derive(Debug, Clone)]
pub struct AppointSecretaryResult {
    /// Handle for the new secretary. Every earlier handle is now inactive.
    pub secretary: Secretary,
    pub event: SecretaryAppointed,
}

/// Handler for appointing secretaries.
pub struct AppointSecretaryHandler {
    gym: SharedGym,
    clock: Arc<dyn Clock>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl AppointSecretaryHandler {
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
        cmd: AppointSecretaryCommand,
        metadata: CommandMetadata,
    ) -> Result<AppointSecretaryResult, GymError> {
        let person = cmd.secretary.into_person()?;

        let secretary = {
            let mut gym = self.gym.lock().await;
            gym.appoint_secretary(person, cmd.salary)
        };

        tracing::info!(
            secretary_id = %secretary.id(),
            correlation_id = %metadata.correlation_id(),
            "Secretary appointed"
        );

        let event = SecretaryAppointed {
            event_id: EventId::new(),
            secretary_id: secretary.id(),
            name: secretary.name().to_string(),
            salary: secretary.salary(),
            appointed_at: Timestamp::from_local(self.clock.now()),
        };
        let envelope = metadata.stamp(event.to_envelope(), secretary.id().to_string());
        self.event_publisher.publish(envelope).await?;

        Ok(AppointSecretaryResult { secretary, event })
    }
}
