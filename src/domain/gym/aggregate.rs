//! Gym aggregate: the facility registry.
//!
//! The gym owns every client, instructor and session, the facility balance,
//! the current secretary and the action log. It is constructed explicitly
//! and passed to the enrollment engine and notification dispatcher.
//!
//! # Access
//!
//! Mutating registry operations are `pub(crate)`; callers outside the crate
//! reach them through a [`Secretary`] handle, which enforces the activity gate.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::{ActionLog, GymError};
use crate::domain::catalog::{ForumPolicy, Session, SessionCatalog, SessionKind};
use crate::domain::foundation::{format_schedule, PersonId, SessionId};
use crate::domain::people::{Balance, Client, Instructor, Person, Secretary};

/// Minimum age for registering as a client.
pub const MINIMUM_CLIENT_AGE: u32 = 18;

/// Result of a scheduling request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheduling {
    /// A new session was registered.
    Created(SessionId),
    /// A structurally equal session already existed; nothing was inserted.
    Existing(SessionId),
}

impl Scheduling {
    pub fn session_id(&self) -> SessionId {
        match self {
            Scheduling::Created(id) | Scheduling::Existing(id) => *id,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Scheduling::Created(_))
    }
}

/// Amounts disbursed by one payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payroll {
    pub secretary: PersonId,
    pub secretary_salary: i64,
    /// `(instructor, sessions taught × salary per session)`, in hiring order.
    pub instructors: Vec<(PersonId, i64)>,
}

impl Payroll {
    pub fn total(&self) -> i64 {
        self.secretary_salary + self.instructors.iter().map(|(_, amount)| amount).sum::<i64>()
    }
}

/// The facility.
///
/// # Invariants
///
/// - client ids are unique
/// - `balance` = opening balance + enrollment payments − salaries paid
/// - `action_log` is append-only
#[derive(Debug)]
pub struct Gym {
    name: String,
    balance: Balance,
    secretary: Option<Secretary>,
    clients: Vec<Client>,
    instructors: Vec<Instructor>,
    sessions: Vec<Session>,
    action_log: ActionLog,
}

impl Gym {
    pub fn new(name: impl Into<String>, opening_balance: i64) -> Self {
        Self {
            name: name.into(),
            balance: Balance::new(opening_balance),
            secretary: None,
            clients: Vec::new(),
            instructors: Vec::new(),
            sessions: Vec::new(),
            action_log: ActionLog::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Facility balance.
    pub fn balance(&self) -> i64 {
        self.balance.amount()
    }

    /// The current secretary, if one has been appointed.
    pub fn secretary(&self) -> Option<&Secretary> {
        self.secretary.as_ref()
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn client(&self, id: PersonId) -> Option<&Client> {
        self.clients.iter().find(|c| c.id() == id)
    }

    pub fn is_registered(&self, id: PersonId) -> bool {
        self.client(id).is_some()
    }

    pub fn instructors(&self) -> &[Instructor] {
        &self.instructors
    }

    pub fn instructor(&self, id: PersonId) -> Option<&Instructor> {
        self.instructors.iter().find(|i| i.id() == id)
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn session(&self, id: SessionId) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id() == id)
    }

    /// Sessions taking place on `date`, in scheduling order.
    pub fn sessions_on(&self, date: NaiveDate) -> impl Iterator<Item = &Session> {
        self.sessions.iter().filter(move |s| s.date() == date)
    }

    pub fn action_log(&self) -> &ActionLog {
        &self.action_log
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Registry operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Appoints a new secretary, retiring the previous one.
    ///
    /// The returned handle is the only way to perform administrative work.
    pub fn appoint_secretary(&mut self, person: Person, salary: i64) -> Secretary {
        if let Some(previous) = self.secretary.take() {
            previous.retire();
            tracing::info!(secretary_id = %previous.id(), "Secretary retired");
        }

        let secretary = Secretary::new(person, salary);
        self.action_log.record(format!(
            "A new secretary has started working at the gym: {}",
            secretary.name()
        ));
        self.secretary = Some(secretary.clone());
        secretary
    }

    pub(crate) fn register_client(
        &mut self,
        person: Person,
        today: NaiveDate,
    ) -> Result<PersonId, GymError> {
        let age = person.age_on(today);
        if age < MINIMUM_CLIENT_AGE {
            return Err(GymError::invalid_age(age, MINIMUM_CLIENT_AGE));
        }
        if self.is_registered(person.id()) {
            return Err(GymError::duplicate_client(person.id()));
        }

        let client = Client::from_person(person);
        let id = client.id();
        self.action_log
            .record(format!("Registered new client: {}", client.name()));
        self.clients.push(client);
        Ok(id)
    }

    pub(crate) fn hire_instructor(
        &mut self,
        person: Person,
        salary_per_session: i64,
        certifications: Vec<SessionKind>,
    ) -> PersonId {
        let instructor = Instructor::new(person, salary_per_session, certifications);
        let id = instructor.id();
        self.action_log.record(format!(
            "Hired new instructor: {} with salary per hour: {}",
            instructor.name(),
            instructor.salary_per_session()
        ));
        self.instructors.push(instructor);
        id
    }

    pub(crate) fn schedule_session(
        &mut self,
        kind: SessionKind,
        schedule: &str,
        forum: ForumPolicy,
        instructor_id: PersonId,
    ) -> Result<Scheduling, GymError> {
        let instructor = self
            .instructor(instructor_id)
            .ok_or_else(|| GymError::instructor_not_found(instructor_id))?;
        if !instructor.is_qualified_for(kind) {
            return Err(GymError::instructor_not_qualified(instructor_id, kind));
        }
        let instructor_name = instructor.name().to_string();

        let session = SessionCatalog::create(kind, instructor_id, schedule, forum)?;
        if let Some(existing) = self.sessions.iter().find(|s| **s == session) {
            return Ok(Scheduling::Existing(existing.id()));
        }

        let id = session.id();
        self.action_log.record(format!(
            "Created new session: {} on {} with instructor: {}",
            kind,
            format_schedule(&session.schedule()),
            instructor_name
        ));
        self.sessions.push(session);
        if let Some(instructor) = self.instructor_mut(instructor_id) {
            instructor.assign_session(id);
        }
        Ok(Scheduling::Created(id))
    }

    /// Pays the secretary's monthly salary and every instructor's
    /// per-session earnings out of the facility balance.
    pub(crate) fn pay_salaries(&mut self) -> Result<Payroll, GymError> {
        let secretary = self.secretary.as_ref().ok_or(GymError::NoSecretary)?;
        let secretary_salary = secretary.salary();
        secretary.credit(secretary_salary);
        let secretary_id = secretary.id();
        self.balance.debit(secretary_salary);

        let mut instructors = Vec::with_capacity(self.instructors.len());
        for instructor in &mut self.instructors {
            let amount = instructor.payroll_amount();
            instructor.balance_mut().credit(amount);
            self.balance.debit(amount);
            instructors.push((instructor.id(), amount));
        }

        self.action_log
            .record("Salaries have been paid to all employees");
        Ok(Payroll {
            secretary: secretary_id,
            secretary_salary,
            instructors,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Crate-internal mutation (enrollment and notification)
    // ─────────────────────────────────────────────────────────────────────────

    pub(crate) fn client_mut(&mut self, id: PersonId) -> Option<&mut Client> {
        self.clients.iter_mut().find(|c| c.id() == id)
    }

    pub(crate) fn clients_mut(&mut self) -> &mut [Client] {
        &mut self.clients
    }

    pub(crate) fn remove_client(&mut self, id: PersonId) -> Option<Client> {
        let index = self.clients.iter().position(|c| c.id() == id)?;
        Some(self.clients.remove(index))
    }

    pub(crate) fn instructor_mut(&mut self, id: PersonId) -> Option<&mut Instructor> {
        self.instructors.iter_mut().find(|i| i.id() == id)
    }

    pub(crate) fn session_mut(&mut self, id: SessionId) -> Option<&mut Session> {
        self.sessions.iter_mut().find(|s| s.id() == id)
    }

    pub(crate) fn sessions_mut(&mut self) -> &mut [Session] {
        &mut self.sessions
    }

    pub(crate) fn credit(&mut self, amount: i64) {
        self.balance.credit(amount);
    }

    pub(crate) fn record(&mut self, entry: impl Into<String>) {
        self.action_log.record(entry);
    }
}

impl fmt::Display for Gym {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Gym Name: {}", self.name)?;
        if let Some(secretary) = &self.secretary {
            writeln!(f, "Gym Secretary: {}", secretary)?;
        }
        writeln!(f, "Gym Balance: {}", self.balance.amount())?;

        writeln!(f, "\nClients Data:")?;
        for client in &self.clients {
            writeln!(f, "{}", client)?;
        }

        writeln!(f, "\nEmployees Data:")?;
        for instructor in &self.instructors {
            writeln!(f, "{}", instructor)?;
        }
        if let Some(secretary) = &self.secretary {
            writeln!(f, "{}", secretary)?;
        }

        writeln!(f, "\nSessions Data:")?;
        for session in &self.sessions {
            writeln!(f, "{}", session)?;
        }
        Ok(())
    }
}
