//! People module - Persons and the roles they hold at the gym.
//!
//! A [`Person`] carries identity and a balance. Roles wrap a person:
//! [`Client`] adds a mailbox, [`Instructor`] adds certifications and pay,
//! [`Secretary`] is the administrator handle.

mod client;
mod instructor;
mod person;
mod secretary;

pub use client::Client;
pub use instructor::Instructor;
pub use person::{Balance, Gender, Person};
pub use secretary::Secretary;
