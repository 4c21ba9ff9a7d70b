//! RegisterClientHandler - Command handler for client registration.

use std::sync::Arc;

use crate::application::{PersonDetails, SharedGym};
use crate::domain::foundation::{
    CommandMetadata, EventId, PersonId, SerializableDomainEvent, Timestamp,
};
use crate::domain::gym::{ClientRegistered, GymError};
use crate::domain::people::{Person, Secretary};
use crate::ports::{Clock, EventPublisher};

/// Who is being registered.
#[derive(Debug, Clone)]
pub enum Registrant {
    /// Someone the gym has never seen; a fresh person id is assigned.
    New(PersonDetails),
    /// An existing person, such as an instructor who also trains. Registering
    /// the same person twice fails with `DuplicateClient`.
    Known(Person),
}

impl Registrant {
    fn into_person(self) -> Result<Person, GymError> {
        match self {
            Registrant::New(details) => Ok(details.into_person()?),
            Registrant::Known(person) => Ok(person),
        }
    }
}

impl From<PersonDetails> for Registrant {
    fn from(details: PersonDetails) -> Self {
        Registrant::New(details)
    }
}

impl From<Person> for Registrant {
    fn from(person: Person) -> Self {
        Registrant::Known(person)
    }
}

/// Command to register a client.
#[derive(Debug, Clone)]
pub struct RegisterClientCommand {
    pub secretary: Secretary,
    pub client: Registrant,
}

#[derive(Debug, Clone)]
pub struct RegisterClientResult {
    pub client_id: PersonId,
    pub event: ClientRegistered,
}

/// Handler for registering clients.
pub struct RegisterClientHandler {
    gym: SharedGym,
    clock: Arc<dyn Clock>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl RegisterClientHandler {
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
        cmd: RegisterClientCommand,
        metadata: CommandMetadata,
    ) -> Result<RegisterClientResult, GymError> {
        let person = cmd.client.into_person()?;
        let name = person.name().to_string();
        let now = self.clock.now();

        let client_id = {
            let mut gym = self.gym.lock().await;
            cmd.secretary.register_client(&mut gym, person, now.date())?
        };

        tracing::info!(
            client_id = %client_id,
            correlation_id = %metadata.correlation_id(),
            "Client registered"
        );

        let event = ClientRegistered {
            event_id: EventId::new(),
            client_id,
            name,
            registered_at: Timestamp::from_local(now),
        };
        let envelope = metadata.stamp(event.to_envelope(), cmd.secretary.id().to_string());
        self.event_publisher.publish(envelope).await?;

        Ok(RegisterClientResult { client_id, event })
    }
}
