//! Application layer - Command handlers.
//!
//! Handlers orchestrate domain operations against one shared facility and
//! publish the resulting events. Each command runs its whole domain operation
//! under the facility lock; events are published after the lock is released.
//!
//! Publishing is not part of the commit. If the publisher fails, the handler
//! returns `GymError::Infrastructure`, but the gym change it reports has
//! already been applied and stays applied.

pub mod handlers;

use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::foundation::ValidationError;
use crate::domain::gym::Gym;
use crate::domain::people::{Gender, Person};

pub use handlers::{
    AppointSecretaryCommand, AppointSecretaryHandler, AppointSecretaryResult, EnrollClientCommand,
    EnrollClientHandler, EnrollClientResult, HireInstructorCommand, HireInstructorHandler,
    HireInstructorResult, NotificationTarget, PaySalariesCommand, PaySalariesHandler,
    PaySalariesResult, RegisterClientCommand, RegisterClientHandler, Registrant,
    RegisterClientResult, ScheduleSessionCommand, ScheduleSessionHandler, ScheduleSessionResult,
    SendNotificationCommand, SendNotificationHandler, SendNotificationResult,
    UnregisterClientCommand, UnregisterClientHandler, UnregisterClientResult,
};

/// The facility shared by every handler.
pub type SharedGym = Arc<Mutex<Gym>>;

/// Wraps a gym for use by the handlers.
pub fn share(gym: Gym) -> SharedGym {
    Arc::new(Mutex::new(gym))
}

/// Raw person data carried by commands.
///
/// Turned into a [`Person`] (and assigned an id) only once the handler runs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersonDetails {
    pub name: String,
    pub balance: i64,
    pub gender: Gender,
    /// `dd-MM-yyyy` or `yyyy-MM-dd`
    pub birth_date: String,
}

impl PersonDetails {
    pub fn new(
        name: impl Into<String>,
        balance: i64,
        gender: Gender,
        birth_date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            balance,
            gender,
            birth_date: birth_date.into(),
        }
    }

    pub fn into_person(self) -> Result<Person, ValidationError> {
        Person::new(self.name, self.balance, self.gender, &self.birth_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_details_build_person() {
        let person = PersonDetails::new("Nofar", 120, Gender::Female, "01-03-1995")
            .into_person()
            .unwrap();
        assert_eq!(person.name(), "Nofar");
        assert_eq!(person.balance().amount(), 120);
    }

    #[test]
    fn person_details_reject_bad_birth_date() {
        let result = PersonDetails::new("Nofar", 120, Gender::Female, "1995/03/01").into_person();
        assert!(matches!(result, Err(ValidationError::InvalidFormat { .. })));
    }
}
