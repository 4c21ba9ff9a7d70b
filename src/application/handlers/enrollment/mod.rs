//! Enrollment command handlers.

mod enroll_client;

pub use enroll_client::{EnrollClientCommand, EnrollClientHandler, EnrollClientResult};
