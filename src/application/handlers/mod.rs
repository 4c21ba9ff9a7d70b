//! Application handlers.
//!
//! One command handler per file. Every handler holds the shared gym, the
//! clock and the event publisher, and takes `(command, CommandMetadata)`.

mod enrollment;
mod notification;
mod registry;

#[cfg(test)]
pub(crate) mod test_support;

pub use enrollment::{EnrollClientCommand, EnrollClientHandler, EnrollClientResult};
pub use notification::{
    NotificationTarget, SendNotificationCommand, SendNotificationHandler, SendNotificationResult,
};
pub use registry::{
    AppointSecretaryCommand, AppointSecretaryHandler, AppointSecretaryResult, HireInstructorCommand,
    HireInstructorHandler, HireInstructorResult, PaySalariesCommand, PaySalariesHandler,
    PaySalariesResult, RegisterClientCommand, RegisterClientHandler, Registrant,
    RegisterClientResult, ScheduleSessionCommand, ScheduleSessionHandler, ScheduleSessionResult,
    UnregisterClientCommand, UnregisterClientHandler, UnregisterClientResult,
};
