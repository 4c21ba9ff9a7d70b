//! Adapters - Implementations of port interfaces.
//!
//! - `events` - In-process event bus
//! - `clock` - System and fixed clocks

pub mod clock;
pub mod events;

pub use clock::{FixedClock, SystemClock};
pub use events::InMemoryEventBus;
