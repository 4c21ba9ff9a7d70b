//! Forum policies: who a session is open to.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::people::Gender;

/// Minimum age for a seniors-only session.
pub const SENIOR_AGE: u32 = 65;

/// Eligibility predicate attached to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForumPolicy {
    /// Anyone may join.
    Open,
    /// Clients aged [`SENIOR_AGE`] or older.
    Seniors,
    FemaleOnly,
    MaleOnly,
}

impl ForumPolicy {
    /// Evaluates the predicate for a client of the given age and gender.
    pub fn admits(&self, age: u32, gender: Gender) -> bool {
        match self {
            ForumPolicy::Open => true,
            ForumPolicy::Seniors => age >= SENIOR_AGE,
            ForumPolicy::FemaleOnly => gender == Gender::Female,
            ForumPolicy::MaleOnly => gender == Gender::Male,
        }
    }

    /// True for the gender-restricted forums.
    pub fn is_gender_restricted(&self) -> bool {
        matches!(self, ForumPolicy::FemaleOnly | ForumPolicy::MaleOnly)
    }
}

impl fmt::Display for ForumPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ForumPolicy::Open => "All",
            ForumPolicy::Seniors => "Seniors",
            ForumPolicy::FemaleOnly => "Female",
            ForumPolicy::MaleOnly => "Male",
        };
        write!(f, "{}", s)
    }
}
