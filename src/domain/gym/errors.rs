//! Facility error types.
//!
//! Enrollment rejections are not errors; they are returned as
//! [`EnrollmentOutcome`](crate::domain::enrollment::EnrollmentOutcome) values.
//! Everything here aborts the requested operation without mutating the gym.

use thiserror::Error;

use crate::domain::catalog::SessionKind;
use crate::domain::foundation::{
    DomainError, ErrorCode, MalformedDate, PersonId, SessionId, ValidationError,
};

/// Errors raised by facility operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GymError {
    /// Client is younger than the registration minimum.
    #[error("Client must be at least {minimum} years old to register (age {age})")]
    InvalidAge { age: u32, minimum: u32 },

    /// A schedule or date string did not match its format.
    #[error(transparent)]
    MalformedSchedule(#[from] MalformedDate),

    /// Person data failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The person is already a registered client.
    #[error("The client {0} is already registered")]
    DuplicateClient(PersonId),

    /// The client is not registered with the facility.
    #[error("The client {0} is not registered with the gym")]
    ClientNotRegistered(PersonId),

    #[error("Instructor {0} is not employed at the gym")]
    InstructorNotFound(PersonId),

    #[error("Instructor {instructor} is not qualified to conduct {kind} sessions")]
    InstructorNotQualified {
        instructor: PersonId,
        kind: SessionKind,
    },

    #[error("Session {0} does not exist")]
    SessionNotFound(SessionId),

    /// The acting secretary has been replaced.
    #[error("Former secretary {0} is not permitted to perform actions")]
    AdministratorInactive(PersonId),

    /// Payroll requires a current secretary.
    #[error("The gym has no secretary")]
    NoSecretary,

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl GymError {
    pub fn invalid_age(age: u32, minimum: u32) -> Self {
        GymError::InvalidAge { age, minimum }
    }

    pub fn duplicate_client(id: PersonId) -> Self {
        GymError::DuplicateClient(id)
    }

    pub fn client_not_registered(id: PersonId) -> Self {
        GymError::ClientNotRegistered(id)
    }

    pub fn instructor_not_found(id: PersonId) -> Self {
        GymError::InstructorNotFound(id)
    }

    pub fn instructor_not_qualified(instructor: PersonId, kind: SessionKind) -> Self {
        GymError::InstructorNotQualified { instructor, kind }
    }

    pub fn session_not_found(id: SessionId) -> Self {
        GymError::SessionNotFound(id)
    }

    pub fn administrator_inactive(secretary: PersonId) -> Self {
        GymError::AdministratorInactive(secretary)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        GymError::Infrastructure(message.into())
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            GymError::InvalidAge { .. } => ErrorCode::InvalidAge,
            GymError::MalformedSchedule(_) => ErrorCode::InvalidFormat,
            GymError::Validation(_) => ErrorCode::ValidationFailed,
            GymError::DuplicateClient(_) => ErrorCode::DuplicateClient,
            GymError::ClientNotRegistered(_) => ErrorCode::ClientNotRegistered,
            GymError::InstructorNotFound(_) => ErrorCode::InstructorNotFound,
            GymError::InstructorNotQualified { .. } => ErrorCode::InstructorNotQualified,
            GymError::SessionNotFound(_) => ErrorCode::SessionNotFound,
            GymError::AdministratorInactive(_) => ErrorCode::AdministratorInactive,
            GymError::NoSecretary => ErrorCode::NoSecretary,
            GymError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }
}

impl From<DomainError> for GymError {
    fn from(err: DomainError) -> Self {
        GymError::Infrastructure(err.to_string())
    }
}

impl From<GymError> for DomainError {
    fn from(err: GymError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
