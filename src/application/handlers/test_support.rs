//! Shared fixtures for handler tests.

use async_trait::async_trait;
use std::sync::Arc;

use crate::adapters::{FixedClock, InMemoryEventBus};
use crate::application::{share, SharedGym};
use crate::domain::catalog::{ForumPolicy, SessionKind};
use crate::domain::foundation::{
    parse_schedule, DomainError, ErrorCode, EventEnvelope, PersonId, SessionId,
};
use crate::domain::gym::Gym;
use crate::domain::people::{Gender, Person, Secretary};
use crate::ports::{Clock, EventPublisher};

pub(crate) const NOW: &str = "01-06-2025 12:00";
pub(crate) const UPCOMING: &str = "10-10-2030 10:00";

/// A gym with an appointed secretary, a fixed clock and a capturing bus.
pub(crate) struct Harness {
    pub gym: SharedGym,
    pub clock: Arc<FixedClock>,
    pub bus: Arc<InMemoryEventBus>,
    pub secretary: Secretary,
}

impl Harness {
    pub fn new() -> Self {
        let mut gym = Gym::new("Test Gym", 0);
        let secretary = gym.appoint_secretary(
            Person::new("Dana", 0, Gender::Female, "1985-04-04").unwrap(),
            3000,
        );
        Self {
            gym: share(gym),
            clock: Arc::new(FixedClock::new(parse_schedule(NOW).unwrap())),
            bus: Arc::new(InMemoryEventBus::new()),
            secretary,
        }
    }

    pub fn clock_port(&self) -> Arc<dyn Clock> {
        self.clock.clone()
    }

    pub fn publisher(&self) -> Arc<dyn EventPublisher> {
        self.bus.clone()
    }

    pub async fn register(&self, balance: i64, gender: Gender, birth: &str) -> PersonId {
        let person = Person::new("Client", balance, gender, birth).unwrap();
        let mut gym = self.gym.lock().await;
        self.secretary
            .register_client(&mut gym, person, self.clock.today())
            .unwrap()
    }

    pub async fn hire(&self, kinds: Vec<SessionKind>) -> PersonId {
        let person = Person::new("Coach", 0, Gender::Male, "1980-01-01").unwrap();
        let mut gym = self.gym.lock().await;
        self.secretary
            .hire_instructor(&mut gym, person, 50, kinds)
            .unwrap()
    }

    pub async fn schedule(
        &self,
        kind: SessionKind,
        schedule: &str,
        forum: ForumPolicy,
        instructor: PersonId,
    ) -> SessionId {
        let mut gym = self.gym.lock().await;
        self.secretary
            .schedule_session(&mut gym, kind, schedule, forum, instructor)
            .unwrap()
            .session_id()
    }

    /// Appoints a replacement, leaving `self.secretary` retired.
    pub async fn replace_secretary(&self) -> Secretary {
        let person = Person::new("Eli", 0, Gender::Male, "1979-09-09").unwrap();
        self.gym.lock().await.appoint_secretary(person, 3200)
    }
}

/// A publisher whose transport is always down.
pub(crate) struct FailingPublisher;

#[async_trait]
impl EventPublisher for FailingPublisher {
    async fn publish(&self, _event: EventEnvelope) -> Result<(), DomainError> {
        Err(DomainError::new(ErrorCode::InternalError, "transport down"))
    }

    async fn publish_all(&self, _events: Vec<EventEnvelope>) -> Result<(), DomainError> {
        Err(DomainError::new(ErrorCode::InternalError, "transport down"))
    }
}
