//! EnrollClientHandler - Command handler for session enrollment.
//!
//! Rejections are successful command executions: the outcome is returned and
//! an `EnrollmentRejected` event is published instead of `ClientEnrolled`.

use std::sync::Arc;

use crate::application::SharedGym;
use crate::domain::enrollment::EnrollmentOutcome;
use crate::domain::foundation::{
    CommandMetadata, EventEnvelope, EventId, PersonId, SerializableDomainEvent, SessionId,
    Timestamp,
};
use crate::domain::gym::{ClientEnrolled, EnrollmentRejected, GymError};
use crate::domain::people::Secretary;
use crate::ports::{Clock, EventPublisher};

/// Command to enroll a registered client in a session.
#[derive(Debug, Clone)]
pub struct EnrollClientCommand {
    pub secretary: Secretary,
    pub client_id: PersonId,
    pub session_id: SessionId,
}

#[derive(Debug, Clone)]
pub struct EnrollClientResult {
    pub outcome: EnrollmentOutcome,
    /// The envelope that was published for this attempt.
    pub envelope: EventEnvelope,
}

/// Handler for enrolling clients.
pub struct EnrollClientHandler {
    gym: SharedGym,
    clock: Arc<dyn Clock>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl EnrollClientHandler {
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

    /// # Errors
    ///
    /// - `AdministratorInactive` or `SessionNotFound` before anything changes
    /// - `Infrastructure` if publishing fails; the enrollment has already been
    ///   applied by then and is not rolled back
    pub async fn handle(
        &self,
        cmd: EnrollClientCommand,
        metadata: CommandMetadata,
    ) -> Result<EnrollClientResult, GymError> {
        let now = self.clock.now();

        let (outcome, price) = {
            let mut gym = self.gym.lock().await;
            let outcome = cmd.secretary.register_client_to_session(
                &mut gym,
                cmd.client_id,
                cmd.session_id,
                now,
            )?;
            let price = gym
                .session(cmd.session_id)
                .map(|s| s.price())
                .unwrap_or_default();
            (outcome, price)
        };

        let occurred_at = Timestamp::from_local(now);
        let envelope = match outcome {
            EnrollmentOutcome::Enrolled => ClientEnrolled {
                event_id: EventId::new(),
                session_id: cmd.session_id,
                client_id: cmd.client_id,
                price,
                enrolled_at: occurred_at,
            }
            .to_envelope(),
            EnrollmentOutcome::Rejected(reason) => EnrollmentRejected {
                event_id: EventId::new(),
                session_id: cmd.session_id,
                client_id: cmd.client_id,
                reason,
                rejected_at: occurred_at,
            }
            .to_envelope(),
        };
        let envelope = metadata.stamp(envelope, cmd.secretary.id().to_string());
        self.event_publisher.publish(envelope.clone()).await?;

        Ok(EnrollClientResult { outcome, envelope })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::{FailingPublisher, Harness, UPCOMING};
    use crate::domain::catalog::{ForumPolicy, SessionKind};
    use crate::domain::enrollment::RejectionReason;
    use crate::domain::people::Gender;

    async fn pilates(h: &Harness) -> SessionId {
        let coach = h.hire(vec![SessionKind::Pilates]).await;
        h.schedule(SessionKind::Pilates, UPCOMING, ForumPolicy::Open, coach)
            .await
    }

    fn command(h: &Harness, client_id: PersonId, session_id: SessionId) -> EnrollClientCommand {
        EnrollClientCommand {
            secretary: h.secretary.clone(),
            client_id,
            session_id,
        }
    }

    #[tokio::test]
    async fn enrollment_publishes_client_enrolled() {
        let h = Harness::new();
        let session = pilates(&h).await;
        let client = h.register(100, Gender::Female, "2005-01-01").await;
        let handler = EnrollClientHandler::new(h.gym.clone(), h.clock_port(), h.publisher());

        let result = handler
            .handle(command(&h, client, session), CommandMetadata::test_fixture())
            .await
            .unwrap();

        assert_eq!(result.outcome, EnrollmentOutcome::Enrolled);
        let enrolled: Vec<ClientEnrolled> = h.bus.payloads_of("client.enrolled.v1");
        assert_eq!(enrolled.len(), 1);
        assert_eq!(enrolled[0].price, 60);

        let gym = h.gym.lock().await;
        assert_eq!(gym.client(client).unwrap().balance().amount(), 40);
        assert_eq!(gym.balance(), 60);
    }

    #[tokio::test]
    async fn rejection_publishes_reason() {
        let h = Harness::new();
        let session = pilates(&h).await;
        let client = h.register(50, Gender::Female, "2005-01-01").await;
        let handler = EnrollClientHandler::new(h.gym.clone(), h.clock_port(), h.publisher());

        let result = handler
            .handle(command(&h, client, session), CommandMetadata::test_fixture())
            .await
            .unwrap();

        assert_eq!(
            result.outcome,
            EnrollmentOutcome::Rejected(RejectionReason::InsufficientFunds)
        );
        let rejected: Vec<EnrollmentRejected> = h.bus.payloads_of("enrollment.rejected.v1");
        assert_eq!(rejected[0].reason, RejectionReason::InsufficientFunds);
        assert!(!h.bus.has_event("client.enrolled.v1"));
    }

    #[tokio::test]
    async fn clock_decides_whether_session_is_upcoming() {
        let h = Harness::new();
        let session = pilates(&h).await;
        let client = h.register(100, Gender::Female, "2005-01-01").await;
        h.clock
            .set(crate::domain::foundation::parse_schedule(UPCOMING).unwrap());
        let handler = EnrollClientHandler::new(h.gym.clone(), h.clock_port(), h.publisher());

        let result = handler
            .handle(command(&h, client, session), CommandMetadata::new())
            .await
            .unwrap();

        assert_eq!(
            result.outcome,
            EnrollmentOutcome::Rejected(RejectionReason::SessionNotUpcoming)
        );
    }

    #[tokio::test]
    async fn retired_secretary_is_refused_without_event() {
        let h = Harness::new();
        let session = pilates(&h).await;
        let client = h.register(100, Gender::Female, "2005-01-01").await;
        h.replace_secretary().await;
        let handler = EnrollClientHandler::new(h.gym.clone(), h.clock_port(), h.publisher());

        let err = handler
            .handle(command(&h, client, session), CommandMetadata::new())
            .await
            .unwrap_err();

        assert!(matches!(err, GymError::AdministratorInactive(_)));
        assert_eq!(h.bus.event_count(), 0);
        assert!(h.gym.lock().await.session(session).unwrap().roster().is_empty());
    }

    #[tokio::test]
    async fn publish_failure_leaves_enrollment_applied() {
        let h = Harness::new();
        let session = pilates(&h).await;
        let client = h.register(100, Gender::Female, "2005-01-01").await;
        let handler =
            EnrollClientHandler::new(h.gym.clone(), h.clock_port(), Arc::new(FailingPublisher));

        let err = handler
            .handle(command(&h, client, session), CommandMetadata::new())
            .await
            .unwrap_err();

        assert!(matches!(err, GymError::Infrastructure(_)));
        let gym = h.gym.lock().await;
        assert!(gym.session(session).unwrap().has_participant(client));
        assert_eq!(gym.client(client).unwrap().balance().amount(), 40);
        assert_eq!(gym.balance(), 60);
    }

    #[tokio::test]
    async fn concurrent_enrollments_never_overfill() {
        let h = Harness::new();
        let coach = h.hire(vec![SessionKind::Ninja]).await;
        let session = h
            .schedule(SessionKind::Ninja, UPCOMING, ForumPolicy::Open, coach)
            .await;
        let mut clients = Vec::new();
        for _ in 0..12 {
            clients.push(h.register(1000, Gender::Male, "1990-01-01").await);
        }
        let handler = Arc::new(EnrollClientHandler::new(
            h.gym.clone(),
            h.clock_port(),
            h.publisher(),
        ));

        let mut tasks = Vec::new();
        for client in clients {
            let handler = handler.clone();
            let cmd = command(&h, client, session);
            tasks.push(tokio::spawn(async move {
                handler.handle(cmd, CommandMetadata::new()).await
            }));
        }
        let mut enrolled = 0;
        for task in tasks {
            if task.await.unwrap().unwrap().outcome.is_enrolled() {
                enrolled += 1;
            }
        }

        assert_eq!(enrolled, 5);
        let gym = h.gym.lock().await;
        assert_eq!(gym.session(session).unwrap().roster().len(), 5);
        assert_eq!(gym.balance(), 750);
    }
}
