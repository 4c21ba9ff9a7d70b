//! Clock adapters.
//!
//! - `SystemClock` - Local wall-clock time of the host
//! - `FixedClock` - Manually controlled time for tests and replays

use chrono::{Duration, Local, NaiveDateTime};
use std::sync::RwLock;

use crate::ports::Clock;

/// Reads the host's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock that only moves when told to.
///
/// # Panics
///
/// Methods panic if the internal lock is poisoned.
#[derive(Debug)]
pub struct FixedClock {
    now: RwLock<NaiveDateTime>,
}

impl FixedClock {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    /// Moves the clock to `now`.
    pub fn set(&self, now: NaiveDateTime) {
        *self.now.write().expect("FixedClock: lock poisoned") = now;
    }

    /// Moves the clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.write().expect("FixedClock: lock poisoned");
        *now += by;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.read().expect("FixedClock: lock poisoned")
    }
}
