//! Session entity: one scheduled class with its roster.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ForumPolicy, SessionKind};
use crate::domain::foundation::{format_schedule, PersonId, SessionId};

/// A scheduled class.
///
/// # Invariants
///
/// - `roster.len() <= capacity`
/// - a client appears in `roster` at most once, in enrollment order
/// - `capacity` and `price` are copied from `kind` at creation and never change
///
/// Equality is structural over kind, instructor, schedule, forum, roster,
/// capacity and price. The `id` is a lookup handle and is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    id: SessionId,
    kind: SessionKind,
    instructor: PersonId,
    schedule: NaiveDateTime,
    forum: ForumPolicy,
    roster: Vec<PersonId>,
    capacity: usize,
    price: u32,
}

impl Session {
    pub(crate) fn new(
        kind: SessionKind,
        instructor: PersonId,
        schedule: NaiveDateTime,
        forum: ForumPolicy,
    ) -> Self {
        let policy = kind.policy();
        Self {
            id: SessionId::new(),
            kind,
            instructor,
            schedule,
            forum,
            roster: Vec::new(),
            capacity: policy.capacity,
            price: policy.price,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    pub fn instructor(&self) -> PersonId {
        self.instructor
    }

    pub fn schedule(&self) -> NaiveDateTime {
        self.schedule
    }

    /// Calendar date the session takes place on.
    pub fn date(&self) -> NaiveDate {
        self.schedule.date()
    }

    pub fn forum(&self) -> ForumPolicy {
        self.forum
    }

    /// Enrolled clients, in enrollment order.
    pub fn roster(&self) -> &[PersonId] {
        &self.roster
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn price(&self) -> u32 {
        self.price
    }

    pub fn has_participant(&self, client: PersonId) -> bool {
        self.roster.contains(&client)
    }

    pub fn is_full(&self) -> bool {
        self.roster.len() >= self.capacity
    }

    /// True when the session starts strictly after `now`.
    pub fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        self.schedule > now
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Roster mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a client to the roster.
    ///
    /// Returns false, leaving the roster untouched, if the client is already
    /// present or the session is full.
    pub(crate) fn admit(&mut self, client: PersonId) -> bool {
        if self.has_participant(client) || self.is_full() {
            return false;
        }
        self.roster.push(client);
        true
    }

    /// Removes a client from the roster. Returns whether they were present.
    pub(crate) fn remove_participant(&mut self, client: PersonId) -> bool {
        let before = self.roster.len();
        self.roster.retain(|id| *id != client);
        self.roster.len() != before
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.instructor == other.instructor
            && self.schedule == other.schedule
            && self.forum == other.forum
            && self.roster == other.roster
            && self.capacity == other.capacity
            && self.price == other.price
    }
}

impl Eq for Session {}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Session Type: {} | Date: {} | Forum: {} | Instructor: {} | Participants: {}/{}",
            self.kind,
            format_schedule(&self.schedule),
            self.forum,
            self.instructor,
            self.roster.len(),
            self.capacity
        )
    }
}
