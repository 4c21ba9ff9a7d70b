//! Registry command handlers: staff, clients, sessions and payroll.

mod appoint_secretary;
mod hire_instructor;
mod pay_salaries;
mod register_client;
mod schedule_session;
mod unregister_client;

pub use appoint_secretary::{
    AppointSecretaryCommand, AppointSecretaryHandler, AppointSecretaryResult,
};
pub use hire_instructor::{HireInstructorCommand, HireInstructorHandler, HireInstructorResult};
pub use pay_salaries::{PaySalariesCommand, PaySalariesHandler, PaySalariesResult};
pub use register_client::{
    RegisterClientCommand, RegisterClientHandler, RegisterClientResult, Registrant,
};
pub use schedule_session::{
    ScheduleSessionCommand, ScheduleSessionHandler, ScheduleSessionResult,
};
pub use unregister_client::{
    UnregisterClientCommand, UnregisterClientHandler, UnregisterClientResult,
};
