//! ScheduleSessionHandler - Command handler for scheduling sessions.

use std::sync::Arc;

use crate::application::SharedGym;
use crate::domain::catalog::{ForumPolicy, SessionKind};
use crate::domain::foundation::{
    CommandMetadata, EventId, PersonId, SerializableDomainEvent, Timestamp,
};
use crate::domain::gym::{GymError, Scheduling, SessionScheduled};
use crate::domain::people::Secretary;
use crate::ports::{Clock, EventPublisher};

/// Command to schedule a session.
#[derive(Debug, Clone)]
pub struct ScheduleSessionCommand {
    pub secretary: Secretary,
    pub kind: SessionKind,
    /// `dd-MM-yyyy HH:mm`
    pub schedule: String,
    pub forum: ForumPolicy,
    pub instructor_id: PersonId,
}

#[derive(Debug, Clone)]
pub struct ScheduleSessionResult {
    pub scheduling: Scheduling,
    /// `None` when an equal session already existed.
    pub event: Option<SessionScheduled>,
}

/// Handler for scheduling sessions.
pub struct ScheduleSessionHandler {
    gym: SharedGym,
    clock: Arc<dyn Clock>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl ScheduleSessionHandler {
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
        cmd: ScheduleSessionCommand,
        metadata: CommandMetadata,
    ) -> Result<ScheduleSessionResult, GymError> {
        let scheduling = {
            let mut gym = self.gym.lock().await;
            cmd.secretary.schedule_session(
                &mut gym,
                cmd.kind,
                &cmd.schedule,
                cmd.forum,
                cmd.instructor_id,
            )?
        };

        let Scheduling::Created(session_id) = scheduling else {
            tracing::debug!(
                session_id = %scheduling.session_id(),
                "Equal session already scheduled"
            );
            return Ok(ScheduleSessionResult {
                scheduling,
                event: None,
            });
        };

        tracing::info!(session_id = %session_id, kind = %cmd.kind, "Session scheduled");

        let event = SessionScheduled {
            event_id: EventId::new(),
            session_id,
            kind: cmd.kind,
            forum: cmd.forum,
            instructor_id: cmd.instructor_id,
            schedule: cmd.schedule,
            scheduled_at: Timestamp::from_local(self.clock.now()),
        };
        let envelope = metadata.stamp(event.to_envelope(), cmd.secretary.id().to_string());
        self.event_publisher.publish(envelope).await?;

        Ok(ScheduleSessionResult {
            scheduling,
            event: Some(event),
        })
    }
}
