//! Clock port - Source of the local wall-clock time.
//!
//! Enrollment decides "upcoming" and client age against the gym's local time,
//! so the application layer reads the time through this port rather than
//! calling the system clock directly.

use chrono::{NaiveDate, NaiveDateTime};

/// Port for reading the current local date and time.
pub trait Clock: Send + Sync {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;

    /// Current local date.
    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}
