//! Calendar text formats accepted at the facility's edges.
//!
//! | Use | Format |
//! |-----|--------|
//! | Session schedule | `dd-MM-yyyy HH:mm` |
//! | Notification date | `dd-MM-yyyy` |
//! | Birth date | `dd-MM-yyyy` or `yyyy-MM-dd` |
//!
//! Shapes are strict: every field must be zero-padded to its full width.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Display pattern of a session schedule.
pub const SCHEDULE_FORMAT: &str = "dd-MM-yyyy HH:mm";

/// Display pattern of a date-only value.
pub const DATE_FORMAT: &str = "dd-MM-yyyy";

/// Display pattern of an ISO birth date.
pub const ISO_DATE_FORMAT: &str = "yyyy-MM-dd";

const SCHEDULE_CHRONO: &str = "%d-%m-%Y %H:%M";
const DATE_CHRONO: &str = "%d-%m-%Y";
const ISO_DATE_CHRONO: &str = "%Y-%m-%d";

/// Text that does not match the expected calendar format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{input}' is not a valid date in the {expected} format")]
pub struct MalformedDate {
    pub input: String,
    pub expected: &'static str,
}

impl MalformedDate {
    pub fn new(input: impl Into<String>, expected: &'static str) -> Self {
        Self {
            input: input.into(),
            expected,
        }
    }
}

/// Parses a session schedule (`dd-MM-yyyy HH:mm`).
pub fn parse_schedule(text: &str) -> Result<NaiveDateTime, MalformedDate> {
    if !has_shape(text, "00-00-0000 00:00") {
        return Err(MalformedDate::new(text, SCHEDULE_FORMAT));
    }
    NaiveDateTime::parse_from_str(text, SCHEDULE_CHRONO)
        .map_err(|_| MalformedDate::new(text, SCHEDULE_FORMAT))
}

/// Parses a date-only value (`dd-MM-yyyy`).
pub fn parse_date(text: &str) -> Result<NaiveDate, MalformedDate> {
    if !has_shape(text, "00-00-0000") {
        return Err(MalformedDate::new(text, DATE_FORMAT));
    }
    NaiveDate::parse_from_str(text, DATE_CHRONO).map_err(|_| MalformedDate::new(text, DATE_FORMAT))
}

/// Parses a birth date in either `yyyy-MM-dd` or `dd-MM-yyyy`.
pub fn parse_birth_date(text: &str) -> Result<NaiveDate, MalformedDate> {
    if has_shape(text, "0000-00-00") {
        return NaiveDate::parse_from_str(text, ISO_DATE_CHRONO)
            .map_err(|_| MalformedDate::new(text, ISO_DATE_FORMAT));
    }
    if has_shape(text, "00-00-0000") {
        return parse_date(text);
    }
    Err(MalformedDate::new(text, "dd-MM-yyyy or yyyy-MM-dd"))
}

/// Renders a schedule back into `dd-MM-yyyy HH:mm`.
pub fn format_schedule(at: &NaiveDateTime) -> String {
    at.format(SCHEDULE_CHRONO).to_string()
}

/// Renders a date back into `dd-MM-yyyy`.
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_CHRONO).to_string()
}

/// `0` in the shape stands for one ASCII digit; anything else must match literally.
fn has_shape(text: &str, shape: &str) -> bool {
    text.len() == shape.len()
        && text.bytes().zip(shape.bytes()).all(|(c, s)| match s {
            b'0' => c.is_ascii_digit(),
            literal => c == literal,
        })
}
