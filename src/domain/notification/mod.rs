//! Notification module - Message fan-out to client mailboxes.
//!
//! Three recipient strategies: one session's roster, every session on a
//! date, or every registered client. Recipients are derived from the gym at
//! call time.

mod dispatcher;

pub use dispatcher::NotificationDispatcher;
