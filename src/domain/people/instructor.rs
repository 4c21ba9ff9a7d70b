//! Instructor role: certifications, per-session pay and taught sessions.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Balance, Person};
use crate::domain::catalog::SessionKind;
use crate::domain::foundation::{PersonId, SessionId};

/// An employed instructor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instructor {
    person: Person,
    /// Paid once per session taught, at every payroll run.
    salary_per_session: i64,
    certifications: Vec<SessionKind>,
    sessions: Vec<SessionId>,
}

impl Instructor {
    pub fn new(person: Person, salary_per_session: i64, certifications: Vec<SessionKind>) -> Self {
        let mut unique = Vec::with_capacity(certifications.len());
        for kind in certifications {
            if !unique.contains(&kind) {
                unique.push(kind);
            }
        }
        Self {
            person,
            salary_per_session,
            certifications: unique,
            sessions: Vec::new(),
        }
    }

    pub fn id(&self) -> PersonId {
        self.person.id()
    }

    pub fn name(&self) -> &str {
        self.person.name()
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn balance(&self) -> Balance {
        self.person.balance()
    }

    pub fn salary_per_session(&self) -> i64 {
        self.salary_per_session
    }

    pub fn certifications(&self) -> &[SessionKind] {
        &self.certifications
    }

    pub fn is_qualified_for(&self, kind: SessionKind) -> bool {
        self.certifications.contains(&kind)
    }

    /// Sessions this instructor has been scheduled to teach.
    pub fn sessions(&self) -> &[SessionId] {
        &self.sessions
    }

    /// Amount owed at the next payroll run.
    pub fn payroll_amount(&self) -> i64 {
        self.sessions.len() as i64 * self.salary_per_session
    }

    pub(crate) fn assign_session(&mut self, session_id: SessionId) {
        self.sessions.push(session_id);
    }

    pub(crate) fn balance_mut(&mut self) -> &mut Balance {
        self.person.balance_mut()
    }
}

impl fmt::Display for Instructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let certified: Vec<String> = self.certifications.iter().map(ToString::to_string).collect();
        write!(
            f,
            "{} | Role: Instructor | Salary per Session: {} | Certified Classes: {}",
            self.person,
            self.salary_per_session,
            certified.join(", ")
        )
    }
}
