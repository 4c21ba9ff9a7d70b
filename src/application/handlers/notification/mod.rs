//! Notification command handlers.

mod send_notification;

pub use send_notification::{
    NotificationTarget, SendNotificationCommand, SendNotificationHandler, SendNotificationResult,
};
