//! Person data shared by every role, plus the balance ledger.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{format_date, parse_birth_date, PersonId, ValidationError};

/// Gender recorded at registration; drives gender-restricted forums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        };
        write!(f, "{}", s)
    }
}

/// Money held by a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Balance(i64);

impl Balance {
    pub fn new(amount: i64) -> Self {
        Self(amount)
    }

    pub fn amount(&self) -> i64 {
        self.0
    }

    pub fn credit(&mut self, amount: i64) {
        self.0 += amount;
    }

    pub fn debit(&mut self, amount: i64) {
        self.0 -= amount;
    }

    /// True when paying `price` would leave a non-negative balance.
    pub fn covers(&self, price: i64) -> bool {
        self.0 - price >= 0
    }
}

/// Identity and account data for someone the gym knows about.
///
/// Equality is by id: the same person seen through two roles compares equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    id: PersonId,
    name: String,
    gender: Gender,
    birth_date: NaiveDate,
    balance: Balance,
}

impl Person {
    /// Creates a person and assigns the next id from the sequence.
    ///
    /// `birth_date` accepts `yyyy-MM-dd` or `dd-MM-yyyy`.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is blank
    /// - `InvalidFormat` if the birth date does not parse
    pub fn new(
        name: impl Into<String>,
        balance: i64,
        gender: Gender,
        birth_date: &str,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        let birth_date = parse_birth_date(birth_date)?;

        Ok(Self {
            id: PersonId::next(),
            name,
            gender,
            birth_date,
            balance: Balance::new(balance),
        })
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn balance(&self) -> Balance {
        self.balance
    }

    pub(crate) fn balance_mut(&mut self) -> &mut Balance {
        &mut self.balance
    }

    /// Age in whole years on `today`; zero for birth dates in the future.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        today.years_since(self.birth_date).unwrap_or(0)
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Person {}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Gender: {} | Birthday: {} | Balance: {}",
            self.id,
            self.name,
            self.gender,
            format_date(&self.birth_date),
            self.balance.amount()
        )
    }
}
