//! Enrollment module - Eligibility checks and roster/ledger mutation.

mod engine;
mod outcome;

pub use engine::EnrollmentEngine;
pub use outcome::{EnrollmentOutcome, RejectionReason, Unenrollment};
