//! UnregisterClientHandler - Command handler for removing a client.

use std::sync::Arc;

use crate::application::SharedGym;
use crate::domain::enrollment::Unenrollment;
use crate::domain::foundation::{
    CommandMetadata, EventId, PersonId, SerializableDomainEvent, Timestamp,
};
use crate::domain::gym::{ClientUnregistered, GymError};
use crate::domain::people::Secretary;
use crate::ports::{Clock, EventPublisher};

/// Command to remove a client from the facility and every roster.
#[derive(Debug, Clone)]
pub struct UnregisterClientCommand {
    pub secretary: Secretary,
    pub client_id: PersonId,
}

#[derive(Debug, Clone)]
pub struct UnregisterClientResult {
    pub unenrollment: Unenrollment,
    pub event: ClientUnregistered,
}

/// Handler for unregistering clients. No refunds are issued.
pub struct UnregisterClientHandler {
    gym: SharedGym,
    clock: Arc<dyn Clock>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl UnregisterClientHandler {
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
        cmd: UnregisterClientCommand,
        metadata: CommandMetadata,
    ) -> Result<UnregisterClientResult, GymError> {
        let unenrollment = {
            let mut gym = self.gym.lock().await;
            cmd.secretary.unregister_client(&mut gym, cmd.client_id)?
        };

        let event = ClientUnregistered {
            event_id: EventId::new(),
            client_id: unenrollment.client_id,
            sessions_left: unenrollment.sessions_left.clone(),
            unregistered_at: Timestamp::from_local(self.clock.now()),
        };
        let envelope = metadata.stamp(event.to_envelope(), cmd.secretary.id().to_string());
        self.event_publisher.publish(envelope).await?;

        Ok(UnregisterClientResult {
            unenrollment,
            event,
        })
    }
}
