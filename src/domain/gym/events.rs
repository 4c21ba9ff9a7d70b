//! Gym domain events.
//!
//! Published by the application handlers after each command commits.
//! Events are named in past tense and carry identifiers, not entities.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::{ForumPolicy, SessionKind};
use crate::domain::enrollment::RejectionReason;
use crate::domain::foundation::{domain_event, EventId, PersonId, SessionId, Timestamp};

/// A new secretary took office; the previous one, if any, was retired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretaryAppointed {
    pub event_id: EventId,
    pub secretary_id: PersonId,
    pub name: String,
    pub salary: i64,
    pub appointed_at: Timestamp,
}

domain_event!(
    SecretaryAppointed,
    event_type = "secretary.appointed.v1",
    schema_version = 1,
    aggregate_id = secretary_id,
    aggregate_type = "Secretary",
    occurred_at = appointed_at,
    event_id = event_id
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRegistered {
    pub event_id: EventId,
    pub client_id: PersonId,
    pub name: String,
    pub registered_at: Timestamp,
}

domain_event!(
    ClientRegistered,
    event_type = "client.registered.v1",
    schema_version = 1,
    aggregate_id = client_id,
    aggregate_type = "Client",
    occurred_at = registered_at,
    event_id = event_id
);

/// A client left the facility and every roster they were on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientUnregistered {
    pub event_id: EventId,
    pub client_id: PersonId,
    pub sessions_left: Vec<SessionId>,
    pub unregistered_at: Timestamp,
}

domain_event!(
    ClientUnregistered,
    event_type = "client.unregistered.v1",
    schema_version = 1,
    aggregate_id = client_id,
    aggregate_type = "Client",
    occurred_at = unregistered_at,
    event_id = event_id
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructorHired {
    pub event_id: EventId,
    pub instructor_id: PersonId,
    pub name: String,
    pub salary_per_session: i64,
    pub certifications: Vec<SessionKind>,
    pub hired_at: Timestamp,
}

domain_event!(
    InstructorHired,
    event_type = "instructor.hired.v1",
    schema_version = 1,
    aggregate_id = instructor_id,
    aggregate_type = "Instructor",
    occurred_at = hired_at,
    event_id = event_id
);

/// A new session was registered. Not emitted when an equal session existed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionScheduled {
    pub event_id: EventId,
    pub session_id: SessionId,
    pub kind: SessionKind,
    pub forum: ForumPolicy,
    pub instructor_id: PersonId,
    /// `dd-MM-yyyy HH:mm`
    pub schedule: String,
    pub scheduled_at: Timestamp,
}

domain_event!(
    SessionScheduled,
    event_type = "session.scheduled.v1",
    schema_version = 1,
    aggregate_id = session_id,
    aggregate_type = "Session",
    occurred_at = scheduled_at,
    event_id = event_id
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientEnrolled {
    pub event_id: EventId,
    pub session_id: SessionId,
    pub client_id: PersonId,
    pub price: u32,
    pub enrolled_at: Timestamp,
}

domain_event!(
    ClientEnrolled,
    event_type = "client.enrolled.v1",
    schema_version = 1,
    aggregate_id = session_id,
    aggregate_type = "Session",
    occurred_at = enrolled_at,
    event_id = event_id
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRejected {
    pub event_id: EventId,
    pub session_id: SessionId,
    pub client_id: PersonId,
    pub reason: RejectionReason,
    pub rejected_at: Timestamp,
}

domain_event!(
    EnrollmentRejected,
    event_type = "enrollment.rejected.v1",
    schema_version = 1,
    aggregate_id = session_id,
    aggregate_type = "Session",
    occurred_at = rejected_at,
    event_id = event_id
);

/// Which recipients a notification went to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotificationAudience {
    Session { session_id: SessionId },
    /// `dd-MM-yyyy`
    Date { date: String },
    AllClients,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSent {
    pub event_id: EventId,
    pub secretary_id: PersonId,
    pub audience: NotificationAudience,
    pub message: String,
    pub recipients: usize,
    pub sent_at: Timestamp,
}

domain_event!(
    NotificationSent,
    event_type = "notification.sent.v1",
    schema_version = 1,
    aggregate_id = secretary_id,
    aggregate_type = "Secretary",
    occurred_at = sent_at,
    event_id = event_id
);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalariesPaid {
    pub event_id: EventId,
    pub secretary_id: PersonId,
    pub total: i64,
    pub employees_paid: usize,
    pub paid_at: Timestamp,
}

domain_event!(
    SalariesPaid,
    event_type = "salaries.paid.v1",
    schema_version = 1,
    aggregate_id = secretary_id,
    aggregate_type = "Secretary",
    occurred_at = paid_at,
    event_id = event_id
);
