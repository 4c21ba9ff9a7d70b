//! Notification fan-out to client mailboxes.

use chrono::NaiveDate;
use std::collections::HashSet;

use crate::domain::foundation::{format_date, format_schedule, parse_date, PersonId, SessionId};
use crate::domain::gym::{Gym, GymError};

/// Delivers a message to a recipient set chosen at call time.
///
/// Each dispatch appends exactly one summary line to the action log and
/// returns the number of mailboxes that received the message. Outside the
/// crate it is reached through the `notify_*` methods of an active
/// [`Secretary`](crate::domain::people::Secretary).
pub struct NotificationDispatcher<'g> {
    gym: &'g mut Gym,
}

impl<'g> NotificationDispatcher<'g> {
    pub(crate) fn new(gym: &'g mut Gym) -> Self {
        Self { gym }
    }

    /// Every participant of one session, unconditionally.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session is not registered with the gym
    pub fn notify_by_session(
        &mut self,
        session_id: SessionId,
        message: &str,
    ) -> Result<usize, GymError> {
        let session = self
            .gym
            .session(session_id)
            .ok_or_else(|| GymError::session_not_found(session_id))?;
        let recipients = session.roster().to_vec();
        let entry = format!(
            "A message was sent to everyone registered for session {} on {} : {}",
            session.kind(),
            format_schedule(&session.schedule()),
            message
        );

        let delivered = self.deliver(&recipients, message, false);
        tracing::info!(session_id = %session_id, delivered, "Session notification sent");
        self.gym.record(entry);
        Ok(delivered)
    }

    /// Every participant of every session on `date` (`dd-MM-yyyy`).
    ///
    /// A client whose mailbox already holds this exact message is skipped,
    /// so someone booked into two sessions that day receives it once.
    ///
    /// # Errors
    ///
    /// - `MalformedSchedule` if `date` is not `dd-MM-yyyy`
    pub fn notify_by_date(&mut self, date: &str, message: &str) -> Result<usize, GymError> {
        let date = parse_date(date)?;
        Ok(self.notify_on(date, message))
    }

    /// Same as [`notify_by_date`](Self::notify_by_date) with a parsed date.
    pub fn notify_on(&mut self, date: NaiveDate, message: &str) -> usize {
        let mut seen = HashSet::new();
        let recipients: Vec<PersonId> = self
            .gym
            .sessions_on(date)
            .flat_map(|session| session.roster().iter().copied())
            .filter(|id| seen.insert(*id))
            .collect();

        let delivered = self.deliver(&recipients, message, true);
        tracing::info!(
            date = %format_date(&date),
            candidates = recipients.len(),
            delivered,
            "Date notification sent"
        );
        self.gym.record(format!(
            "A message was sent to everyone registered for a session on {} : {}",
            format_date(&date),
            message
        ));
        delivered
    }

    /// Every registered client, unconditionally.
    pub fn notify_all(&mut self, message: &str) -> usize {
        let mut delivered = 0;
        for client in self.gym.clients_mut() {
            client.receive(message);
            delivered += 1;
        }
        tracing::info!(delivered, "Broadcast notification sent");
        self.gym
            .record(format!("A message was sent to all gym clients: {}", message));
        delivered
    }

    /// Pushes `message` into each recipient's mailbox. Recipients that are no
    /// longer registered are skipped.
    fn deliver(&mut self, recipients: &[PersonId], message: &str, skip_duplicates: bool) -> usize {
        let mut delivered = 0;
        for id in recipients {
            let Some(client) = self.gym.client_mut(*id) else {
                continue;
            };
            if skip_duplicates && client.has_notification(message) {
                continue;
            }
            client.receive(message);
            delivered += 1;
        }
        delivered
    }
}
