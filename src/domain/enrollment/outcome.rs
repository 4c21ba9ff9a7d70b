//! Enrollment outcomes and rejection reasons.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{PersonId, SessionId};

/// Why an enrollment was refused, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// The client is already on the roster.
    AlreadyEnrolled,
    /// The client is not registered with the facility.
    NotRegisteredWithFacility,
    /// The roster has reached capacity.
    SessionFull,
    /// The session does not start strictly after the evaluation time.
    SessionNotUpcoming,
    /// The session's forum excludes the client's age or gender.
    ForumIneligible,
    /// The client's balance would go negative.
    InsufficientFunds,
}

impl RejectionReason {
    /// Hard rejections short-circuit the remaining checks.
    pub fn is_hard(&self) -> bool {
        matches!(
            self,
            RejectionReason::AlreadyEnrolled | RejectionReason::NotRegisteredWithFacility
        )
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RejectionReason::AlreadyEnrolled => "already enrolled",
            RejectionReason::NotRegisteredWithFacility => "not registered with facility",
            RejectionReason::SessionFull => "session full",
            RejectionReason::SessionNotUpcoming => "session not upcoming",
            RejectionReason::ForumIneligible => "forum ineligible",
            RejectionReason::InsufficientFunds => "insufficient funds",
        };
        write!(f, "{}", s)
    }
}

/// Result of one enrollment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum EnrollmentOutcome {
    Enrolled,
    Rejected(RejectionReason),
}

impl EnrollmentOutcome {
    pub fn is_enrolled(&self) -> bool {
        matches!(self, EnrollmentOutcome::Enrolled)
    }

    pub fn rejection(&self) -> Option<RejectionReason> {
        match self {
            EnrollmentOutcome::Enrolled => None,
            EnrollmentOutcome::Rejected(reason) => Some(*reason),
        }
    }
}

/// Effect of removing a client from the facility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unenrollment {
    pub client_id: PersonId,
    /// Sessions whose roster the client was removed from.
    pub sessions_left: Vec<SessionId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_first_two_reasons_are_hard() {
        assert!(RejectionReason::AlreadyEnrolled.is_hard());
        assert!(RejectionReason::NotRegisteredWithFacility.is_hard());
        assert!(!RejectionReason::SessionFull.is_hard());
        assert!(!RejectionReason::InsufficientFunds.is_hard());
    }

    #[test]
    fn outcome_accessors() {
        assert!(EnrollmentOutcome::Enrolled.is_enrolled());
        assert_eq!(EnrollmentOutcome::Enrolled.rejection(), None);

        let rejected = EnrollmentOutcome::Rejected(RejectionReason::SessionFull);
        assert!(!rejected.is_enrolled());
        assert_eq!(rejected.rejection(), Some(RejectionReason::SessionFull));
    }

    #[test]
    fn outcome_serializes_with_reason() {
        let json = serde_json::to_value(EnrollmentOutcome::Rejected(
            RejectionReason::ForumIneligible,
        ))
        .unwrap();
        assert_eq!(json["status"], "rejected");
        assert_eq!(json["reason"], "forum_ineligible");
    }
}
