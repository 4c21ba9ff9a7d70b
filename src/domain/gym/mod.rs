//! Gym module - The facility registry and its audit trail.
//!
//! # Structure
//!
//! - [`Gym`] owns clients, instructors, sessions, the facility balance and
//!   the current [`Secretary`](crate::domain::people::Secretary)
//! - [`ActionLog`] is the append-only record of administrative events
//! - [`GymError`] covers every way a facility operation can fail
//! - `events` holds the domain events published by the application layer

mod action_log;
mod aggregate;
mod errors;
mod events;

pub use action_log::ActionLog;
pub use aggregate::{Gym, Payroll, Scheduling, MINIMUM_CLIENT_AGE};
pub use errors::GymError;
pub use events::{
    ClientEnrolled, ClientRegistered, ClientUnregistered, EnrollmentRejected, InstructorHired,
    NotificationAudience, NotificationSent, SalariesPaid, SecretaryAppointed, SessionScheduled,
};
