//! Session kinds and their fixed capacity/price policy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kinds of class the gym runs.
///
/// Each kind is bound to an immutable [`SessionPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionKind {
    Pilates,
    MachinePilates,
    ThaiBoxing,
    Ninja,
}

/// Capacity and price attached to a session kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPolicy {
    /// Maximum roster size.
    pub capacity: usize,
    /// Amount charged per enrollment.
    pub price: u32,
}

impl SessionKind {
    /// Every kind, in catalog order.
    pub const ALL: [SessionKind; 4] = [
        SessionKind::Pilates,
        SessionKind::MachinePilates,
        SessionKind::ThaiBoxing,
        SessionKind::Ninja,
    ];

    /// Policy table.
    ///
    /// | Kind | Capacity | Price |
    /// |------|----------|-------|
    /// | Pilates | 30 | 60 |
    /// | MachinePilates | 10 | 80 |
    /// | ThaiBoxing | 20 | 100 |
    /// | Ninja | 5 | 150 |
    pub const fn policy(self) -> SessionPolicy {
        match self {
            SessionKind::Pilates => SessionPolicy {
                capacity: 30,
                price: 60,
            },
            SessionKind::MachinePilates => SessionPolicy {
                capacity: 10,
                price: 80,
            },
            SessionKind::ThaiBoxing => SessionPolicy {
                capacity: 20,
                price: 100,
            },
            SessionKind::Ninja => SessionPolicy {
                capacity: 5,
                price: 150,
            },
        }
    }

    pub const fn capacity(self) -> usize {
        self.policy().capacity
    }

    pub const fn price(self) -> u32 {
        self.policy().price
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SessionKind::Pilates => "Pilates",
            SessionKind::MachinePilates => "MachinePilates",
            SessionKind::ThaiBoxing => "ThaiBoxing",
            SessionKind::Ninja => "Ninja",
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
