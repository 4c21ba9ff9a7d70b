//! Registered gym client with a notification mailbox.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Balance, Gender, Person};
use crate::domain::foundation::PersonId;

/// A person registered with the facility.
///
/// The mailbox keeps every delivered message in order; duplicates are allowed
/// unless the delivering path filters them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    person: Person,
    mailbox: Vec<String>,
}

impl Client {
    pub fn from_person(person: Person) -> Self {
        Self {
            person,
            mailbox: Vec::new(),
        }
    }

    pub fn id(&self) -> PersonId {
        self.person.id()
    }

    pub fn name(&self) -> &str {
        self.person.name()
    }

    pub fn gender(&self) -> Gender {
        self.person.gender()
    }

    pub fn balance(&self) -> Balance {
        self.person.balance()
    }

    pub fn age_on(&self, today: NaiveDate) -> u32 {
        self.person.age_on(today)
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Messages delivered so far, oldest first.
    pub fn notifications(&self) -> &[String] {
        &self.mailbox
    }

    pub fn has_notification(&self, message: &str) -> bool {
        self.mailbox.iter().any(|m| m == message)
    }

    pub(crate) fn receive(&mut self, message: impl Into<String>) {
        self.mailbox.push(message.into());
    }

    pub(crate) fn balance_mut(&mut self) -> &mut Balance {
        self.person.balance_mut()
    }
}

impl PartialEq for Client {
    fn eq(&self, other: &Self) -> bool {
        self.person == other.person
    }
}

impl Eq for Client {}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.person)
    }
}
