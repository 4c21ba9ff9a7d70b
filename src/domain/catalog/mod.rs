//! Session catalog.
//!
//! Maps each [`SessionKind`] to its fixed capacity/price policy and builds
//! [`Session`] values from scheduling requests. Registering a session with the
//! facility is the caller's job.

mod forum;
mod session;
mod session_kind;

pub use forum::{ForumPolicy, SENIOR_AGE};
pub use session::Session;
pub use session_kind::{SessionKind, SessionPolicy};

use crate::domain::foundation::{parse_schedule, MalformedDate, PersonId};

/// Factory for sessions.
pub struct SessionCatalog;

impl SessionCatalog {
    /// Builds an unregistered session.
    ///
    /// Identical inputs produce sessions that compare equal but carry distinct
    /// ids.
    ///
    /// # Errors
    ///
    /// - `MalformedDate` if `schedule` is not `dd-MM-yyyy HH:mm`
    pub fn create(
        kind: SessionKind,
        instructor: PersonId,
        schedule: &str,
        forum: ForumPolicy,
    ) -> Result<Session, MalformedDate> {
        let at = parse_schedule(schedule)?;
        Ok(Session::new(kind, instructor, at, forum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_populates_policy_for_every_kind() {
        for kind in SessionKind::ALL {
            let session = SessionCatalog::create(
                kind,
                PersonId::from_raw(1),
                "10-10-2030 10:00",
                ForumPolicy::Open,
            )
            .unwrap();
            assert_eq!(session.kind(), kind);
            assert_eq!(session.capacity(), kind.capacity());
            assert_eq!(session.price(), kind.price());
        }
    }

    #[test]
    fn create_rejects_malformed_schedule() {
        let result = SessionCatalog::create(
            SessionKind::Pilates,
            PersonId::from_raw(1),
            "2030-10-10 10:00",
            ForumPolicy::Open,
        );
        assert!(result.is_err());
    }

    #[test]
    fn identical_requests_are_structurally_equal() {
        let make = || {
            SessionCatalog::create(
                SessionKind::ThaiBoxing,
                PersonId::from_raw(7),
                "10-10-2030 10:00",
                ForumPolicy::MaleOnly,
            )
            .unwrap()
        };
        let (a, b) = (make(), make());
        assert_eq!(a, b);
        assert_ne!(a.id(), b.id());
    }
}
