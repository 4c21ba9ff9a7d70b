//! Enrollment eligibility engine.

use chrono::NaiveDateTime;

use super::{EnrollmentOutcome, RejectionReason, Unenrollment};
use crate::domain::catalog::{ForumPolicy, Session};
use crate::domain::foundation::{format_schedule, PersonId, SessionId};
use crate::domain::gym::{Gym, GymError};
use crate::domain::people::Client;

/// A failed check and the action-log line describing it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Failure {
    reason: RejectionReason,
    entry: String,
}

impl Failure {
    fn new(reason: RejectionReason, entry: impl Into<String>) -> Self {
        Self {
            reason,
            entry: entry.into(),
        }
    }
}

/// Decides whether a client may join a session and applies the enrollment.
///
/// # Check order
///
/// 1. `AlreadyEnrolled` (hard)
/// 2. `NotRegisteredWithFacility` (hard)
/// 3. `SessionFull`
/// 4. `SessionNotUpcoming`
/// 5. `ForumIneligible`
/// 6. `InsufficientFunds`
///
/// Hard checks stop evaluation. Soft checks are all evaluated and each
/// failure writes its own log line; the outcome names the first one.
/// Nothing is mutated unless every check passes.
///
/// Only constructible inside the crate: outside callers enroll through
/// [`Secretary`](crate::domain::people::Secretary), which checks it is still active.
#[derive(Debug, Clone, Copy)]
pub struct EnrollmentEngine {
    now: NaiveDateTime,
}

impl EnrollmentEngine {
    /// Creates an engine evaluating against the wall-clock time `now`.
    pub(crate) fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    /// Attempts to enroll `client_id` in `session_id`.
    ///
    /// On success the client is appended to the roster, debited the session
    /// price, and the facility is credited the same amount.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session is not registered with the gym
    pub(crate) fn enroll(
        &self,
        gym: &mut Gym,
        client_id: PersonId,
        session_id: SessionId,
    ) -> Result<EnrollmentOutcome, GymError> {
        let session = gym
            .session(session_id)
            .ok_or_else(|| GymError::session_not_found(session_id))?;

        let failures = match self.hard_check(gym, session, client_id) {
            Err(failure) => vec![failure],
            Ok(client) => self.soft_checks(session, client),
        };

        if let Some(first) = failures.first().map(|f| f.reason) {
            tracing::warn!(
                client_id = %client_id,
                session_id = %session_id,
                reason = %first,
                failed_checks = failures.len(),
                "Enrollment rejected"
            );
            for failure in failures {
                gym.record(failure.entry);
            }
            return Ok(EnrollmentOutcome::Rejected(first));
        }

        self.apply(gym, client_id, session_id)?;
        Ok(EnrollmentOutcome::Enrolled)
    }

    /// Removes a client from the facility and from every roster they are on.
    ///
    /// No refunds are issued.
    ///
    /// # Errors
    ///
    /// - `ClientNotRegistered` if the client is unknown to the gym
    pub(crate) fn unenroll(gym: &mut Gym, client_id: PersonId) -> Result<Unenrollment, GymError> {
        let client = gym
            .remove_client(client_id)
            .ok_or_else(|| GymError::client_not_registered(client_id))?;

        let sessions_left: Vec<SessionId> = gym
            .sessions_mut()
            .iter_mut()
            .filter_map(|session| {
                session
                    .remove_participant(client_id)
                    .then(|| session.id())
            })
            .collect();

        tracing::info!(
            client_id = %client_id,
            sessions = sessions_left.len(),
            "Client unregistered"
        );
        gym.record(format!("Unregistered client: {}", client.name()));
        Ok(Unenrollment {
            client_id,
            sessions_left,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Checks
    // ─────────────────────────────────────────────────────────────────────────

    fn hard_check<'g>(
        &self,
        gym: &'g Gym,
        session: &Session,
        client_id: PersonId,
    ) -> Result<&'g Client, Failure> {
        if session.has_participant(client_id) {
            return Err(Failure::new(
                RejectionReason::AlreadyEnrolled,
                "Failed registration: Client is already registered for this session",
            ));
        }
        gym.client(client_id).ok_or_else(|| {
            Failure::new(
                RejectionReason::NotRegisteredWithFacility,
                "Failed registration: Client is not registered with the gym",
            )
        })
    }

    fn soft_checks(&self, session: &Session, client: &Client) -> Vec<Failure> {
        let mut failures = Vec::new();

        if session.is_full() {
            failures.push(Failure::new(
                RejectionReason::SessionFull,
                "Failed registration: No available spots for session",
            ));
        }

        if !session.is_upcoming(self.now) {
            failures.push(Failure::new(
                RejectionReason::SessionNotUpcoming,
                "Failed registration: Session is not in the future",
            ));
        }

        let age = client.age_on(self.now.date());
        if !session.forum().admits(age, client.gender()) {
            let entry = match session.forum() {
                ForumPolicy::Seniors => format!(
                    "Failed registration: Client doesn't meet the age requirements for this session ({})",
                    session.forum()
                ),
                _ => "Failed registration: Client's gender doesn't match the session's gender requirements"
                    .to_string(),
            };
            failures.push(Failure::new(RejectionReason::ForumIneligible, entry));
        }

        if !client.balance().covers(i64::from(session.price())) {
            failures.push(Failure::new(
                RejectionReason::InsufficientFunds,
                "Failed registration: Client doesn't have enough balance",
            ));
        }

        tracing::debug!(
            client_id = %client.id(),
            session_id = %session.id(),
            age,
            failed = failures.len(),
            "Soft enrollment checks evaluated"
        );
        failures
    }

    fn apply(
        &self,
        gym: &mut Gym,
        client_id: PersonId,
        session_id: SessionId,
    ) -> Result<(), GymError> {
        let session = gym
            .session_mut(session_id)
            .ok_or_else(|| GymError::session_not_found(session_id))?;
        session.admit(client_id);
        let price = i64::from(session.price());
        let summary = format!(
            "to session: {} on {} for price: {}",
            session.kind(),
            format_schedule(&session.schedule()),
            session.price()
        );

        let client = gym
            .client_mut(client_id)
            .ok_or_else(|| GymError::client_not_registered(client_id))?;
        client.balance_mut().debit(price);
        let entry = format!("Registered client: {} {}", client.name(), summary);

        gym.credit(price);
        gym.record(entry);
        tracing::info!(
            client_id = %client_id,
            session_id = %session_id,
            price,
            "Client enrolled"
        );
        Ok(())
    }
}
