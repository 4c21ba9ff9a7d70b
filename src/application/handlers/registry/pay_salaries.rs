//! PaySalariesHandler - Command handler for the payroll run.

use std::sync::Arc;

use crate::application::SharedGym;
use crate::domain::foundation::{CommandMetadata, EventId, SerializableDomainEvent, Timestamp};
use crate::domain::gym::{GymError, Payroll, SalariesPaid};
use crate::domain::people::Secretary;
use crate::ports::{Clock, EventPublisher};

/// Command to pay every employee.
#[derive(Debug, Clone)]
pub struct PaySalariesCommand {
    pub secretary: Secretary,
}

#[derive(Debug, Clone)]
pub struct PaySalariesResult {
    pub payroll: Payroll,
    pub event: SalariesPaid,
}

/// Handler for paying salaries out of the facility balance.
pub struct PaySalariesHandler {
    gym: SharedGym,
    clock: Arc<dyn Clock>,
    event_publisher: Arc<dyn EventPublisher>,
}

impl PaySalariesHandler {
    pub fn new(
        gym: SharedGym,
        clock: Arc<dyn Clock>,
        event_publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            gym,
            clock,
            event_publisher,
        }
    }

    pub async fn handle(
        &self,
        cmd: PaySalariesCommand,
        metadata: CommandMetadata,
    ) -> Result<PaySalariesResult, GymError> {
        let (payroll, balance) = {
            let mut gym = self.gym.lock().await;
            let payroll = cmd.secretary.pay_salaries(&mut gym)?;
            (payroll, gym.balance())
        };

        tracing::info!(
            total = payroll.total(),
            facility_balance = balance,
            "Salaries paid"
        );

        let event = SalariesPaid {
            event_id: EventId::new(),
            secretary_id: payroll.secretary,
            total: payroll.total(),
            employees_paid: payroll.instructors.len() + 1,
            paid_at: Timestamp::from_local(self.clock.now()),
        };
        let envelope = metadata.stamp(event.to_envelope(), cmd.secretary.id().to_string());
        self.event_publisher.publish(envelope).await?;

        Ok(PaySalariesResult { payroll, event })
    }
}
