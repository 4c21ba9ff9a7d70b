//! HireInstructorHandler - Command handler for hiring instructors.

use std::sync::Arc;

use crate::application::{PersonDetails, SharedGym};
use crate::domain::catalog::SessionKind;
use crate::domain::foundation::{
    CommandMetadata, EventId, PersonId, SerializableDomainEvent, Timestamp,
};
use crate::domain::gym::{GymError, InstructorHired};
use crate::domain::people::Secretary;
use crate::ports::{Clock, EventPublisher};

/// Command to hire an instructor.
#[derive(Debug, Clone)]
pub struct HireInstructorCommand {
    pub secretary: Secretary,
    pub instructor: PersonDetails,
    pub salary_per_session: i64,
    pub certifications: Vec<SessionKind>,
}

#[derive(Debug, Clone)]
pub struct HireInstructorResult {
    pub instructor_id: PersonId,
    pub event: InstructorHired,
}

/// Handler for hiring instructors.
pub struct HireInstructorHandler {
    gym: SharedGym,
    clock: Arc<dyn Clock>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl HireInstructorHandler {
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
        cmd: HireInstructorCommand,
        metadata: CommandMetadata,
    ) -> Result<HireInstructorResult, GymError> {
        let person = cmd.instructor.into_person()?;
        let name = person.name().to_string();

        let (instructor_id, certifications) = {
            let mut gym = self.gym.lock().await;
            let id = cmd.secretary.hire_instructor(
                &mut gym,
                person,
                cmd.salary_per_session,
                cmd.certifications,
            )?;
            let certifications = gym
                .instructor(id)
                .map(|i| i.certifications().to_vec())
                .unwrap_or_default();
            (id, certifications)
        };

        tracing::info!(instructor_id = %instructor_id, "Instructor hired");

        let event = InstructorHired {
            event_id: EventId::new(),
            instructor_id,
            name,
            salary_per_session: cmd.salary_per_session,
            certifications,
            hired_at: Timestamp::from_local(self.clock.now()),
        };
        let envelope = metadata.stamp(event.to_envelope(), cmd.secretary.id().to_string());
        self.event_publisher.publish(envelope).await?;

        Ok(HireInstructorResult {
            instructor_id,
            event,
        })
    }
}
