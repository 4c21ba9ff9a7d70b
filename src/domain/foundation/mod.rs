//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, calendar formats, events and error
//! types that form the vocabulary of the gym domain.

mod command;
mod errors;
mod events;
mod ids;
mod schedule;
mod timestamp;

pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::{PersonId, SessionId, FIRST_PERSON_ID};
pub use schedule::{
    format_date, format_schedule, parse_birth_date, parse_date, parse_schedule, MalformedDate,
    DATE_FORMAT, ISO_DATE_FORMAT, SCHEDULE_FORMAT,
};
pub use timestamp::Timestamp;
