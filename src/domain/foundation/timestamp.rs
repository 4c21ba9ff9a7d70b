//! Timestamp value object for event times.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Interprets a wall-clock time in the local timezone.
    ///
    /// Ambiguous local times (DST fold) resolve to the earlier instant; times
    /// that do not exist locally fall back to treating the value as UTC.
    pub fn from_local(naive: NaiveDateTime) -> Self {
        match Local.from_local_datetime(&naive).earliest() {
            Some(local) => Self(local.with_timezone(&Utc)),
            None => Self(naive.and_utc()),
        }
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, NaiveDate};

    #[test]
    fn timestamp_now_creates_current_time() {
        let before = Utc::now();
        let ts = Timestamp::now();
        let after = Utc::now();

        assert!(ts.as_datetime() >= &before);
        assert!(ts.as_datetime() <= &after);
    }

    #[test]
    fn timestamp_ordering_works() {
        let early = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let late = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());

        assert!(early.is_before(&late));
        assert!(late.is_after(&early));
        assert!(early < late);
    }

    #[test]
    fn from_local_keeps_the_calendar_date_close() {
        let naive = NaiveDate::from_ymd_opt(2030, 3, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let ts = Timestamp::from_local(naive);
        // Any real timezone offset is < 24h, so noon stays on the same or an adjacent day.
        let day = ts.as_datetime().day();
        assert!((14..=16).contains(&day));
    }

    #[test]
    fn timestamp_serializes_to_json() {
        let ts = Timestamp::from_datetime(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap());
        let json = serde_json::to_string(&ts).unwrap();
        assert!(json.contains("2024-01-15"));
    }
}
