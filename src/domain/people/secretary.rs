//! Secretary role and the administrator activity gate.
//!
//! A secretary handle is the only way to perform administrative work on a
//! [`Gym`]. Appointing a new secretary retires the previous one: every handle
//! cloned from the retired secretary shares its `active` flag and fails with
//! [`GymError::AdministratorInactive`] from then on. Clones also share one
//! balance ledger, so salary paid through the gym shows on every handle.

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use super::{Balance, Person};
use crate::domain::catalog::{ForumPolicy, SessionKind};
use crate::domain::enrollment::{EnrollmentEngine, EnrollmentOutcome, Unenrollment};
use crate::domain::foundation::{format_date, PersonId, SessionId};
use crate::domain::gym::{ActionLog, Gym, GymError, Payroll, Scheduling};
use crate::domain::notification::NotificationDispatcher;

/// The facility's administrator.
#[derive(Debug, Clone)]
pub struct Secretary {
    person: Person,
    /// Paid in full at every payroll run.
    salary: i64,
    active: Arc<AtomicBool>,
    ledger: Arc<RwLock<Balance>>,
}

impl Secretary {
    pub(crate) fn new(person: Person, salary: i64) -> Self {
        let ledger = Arc::new(RwLock::new(person.balance()));
        Self {
            person,
            salary,
            active: Arc::new(AtomicBool::new(true)),
            ledger,
        }
    }

    pub fn id(&self) -> PersonId {
        self.person.id()
    }

    pub fn name(&self) -> &str {
        self.person.name()
    }

    /// The person as appointed. Its balance is the opening balance; use
    /// [`Secretary::balance`] for the current one.
    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn salary(&self) -> i64 {
        self.salary
    }

    pub fn balance(&self) -> Balance {
        *self.ledger.read().expect("Secretary: ledger lock poisoned")
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Permanently deactivates this secretary and every clone of the handle.
    pub(crate) fn retire(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    /// Credits every clone of the handle.
    pub(crate) fn credit(&self, amount: i64) {
        self.ledger
            .write()
            .expect("Secretary: ledger lock poisoned")
            .credit(amount);
    }

    fn ensure_active(&self) -> Result<(), GymError> {
        if self.is_active() {
            Ok(())
        } else {
            tracing::warn!(secretary_id = %self.id(), "Retired secretary attempted an action");
            Err(GymError::administrator_inactive(self.id()))
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Registry
    // ─────────────────────────────────────────────────────────────────────────

    /// Registers `person` as a client. `today` is used for the age check.
    pub fn register_client(
        &self,
        gym: &mut Gym,
        person: Person,
        today: NaiveDate,
    ) -> Result<PersonId, GymError> {
        self.ensure_active()?;
        gym.register_client(person, today)
    }

    /// Removes a client from the facility and from every roster.
    pub fn unregister_client(
        &self,
        gym: &mut Gym,
        client_id: PersonId,
    ) -> Result<Unenrollment, GymError> {
        self.ensure_active()?;
        EnrollmentEngine::unenroll(gym, client_id)
    }

    pub fn hire_instructor(
        &self,
        gym: &mut Gym,
        person: Person,
        salary_per_session: i64,
        certifications: Vec<SessionKind>,
    ) -> Result<PersonId, GymError> {
        self.ensure_active()?;
        Ok(gym.hire_instructor(person, salary_per_session, certifications))
    }

    /// Creates and registers a session, or returns the structurally equal
    /// session that already exists.
    pub fn schedule_session(
        &self,
        gym: &mut Gym,
        kind: SessionKind,
        schedule: &str,
        forum: ForumPolicy,
        instructor_id: PersonId,
    ) -> Result<Scheduling, GymError> {
        self.ensure_active()?;
        gym.schedule_session(kind, schedule, forum, instructor_id)
    }

    pub fn pay_salaries(&self, gym: &mut Gym) -> Result<Payroll, GymError> {
        self.ensure_active()?;
        gym.pay_salaries()
    }

    /// Read-only view of the facility's action log.
    pub fn action_log<'g>(&self, gym: &'g Gym) -> Result<&'g ActionLog, GymError> {
        self.ensure_active()?;
        Ok(gym.action_log())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Enrollment
    // ─────────────────────────────────────────────────────────────────────────

    /// Runs the enrollment checks at `now` and applies the enrollment if all
    /// pass. Rejections are returned as outcomes, not errors.
    pub fn register_client_to_session(
        &self,
        gym: &mut Gym,
        client_id: PersonId,
        session_id: SessionId,
        now: NaiveDateTime,
    ) -> Result<EnrollmentOutcome, GymError> {
        self.ensure_active()?;
        EnrollmentEngine::new(now).enroll(gym, client_id, session_id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Notifications
    // ─────────────────────────────────────────────────────────────────────────

    /// Messages every participant of one session. Returns the recipient count.
    pub fn notify_session(
        &self,
        gym: &mut Gym,
        session_id: SessionId,
        message: &str,
    ) -> Result<usize, GymError> {
        self.ensure_active()?;
        NotificationDispatcher::new(gym).notify_by_session(session_id, message)
    }

    /// Messages every participant of every session on `date` (`dd-MM-yyyy`).
    pub fn notify_date(&self, gym: &mut Gym, date: &str, message: &str) -> Result<usize, GymError> {
        self.ensure_active()?;
        NotificationDispatcher::new(gym).notify_by_date(date, message)
    }

    /// Messages every registered client.
    pub fn notify_all(&self, gym: &mut Gym, message: &str) -> Result<usize, GymError> {
        self.ensure_active()?;
        Ok(NotificationDispatcher::new(gym).notify_all(message))
    }
}

impl PartialEq for Secretary {
    fn eq(&self, other: &Self) -> bool {
        self.person == other.person
    }
}

impl fmt::Display for Secretary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Gender: {} | Birthday: {} | Balance: {} | Role: Secretary | Salary per Month: {}",
            self.id(),
            self.name(),
            self.person.gender(),
            format_date(&self.person.birth_date()),
            self.balance().amount(),
            self.salary
        )
    }
}
