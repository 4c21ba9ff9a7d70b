//! Facility configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::gym::Gym;

/// Facility configuration
#[derive(Debug, Clone, Deserialize)]
pub struct GymConfig {
    /// Display name of the facility
    #[serde(default = "default_name")]
    pub name: String,

    /// Facility balance before any payment or salary
    #[serde(default)]
    pub opening_balance: i64,
}

impl GymConfig {
    /// Builds an empty facility from this configuration.
    pub fn open_gym(&self) -> Gym {
        Gym::new(self.name.clone(), self.opening_balance)
    }

    /// Validate facility configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyGymName);
        }
        if self.opening_balance < 0 {
            return Err(ValidationError::NegativeOpeningBalance(self.opening_balance));
        }
        Ok(())
    }
}

impl Default for GymConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            opening_balance: 0,
        }
    }
}

fn default_name() -> String {
    "Default Gym Name".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GymConfig::default();
        assert_eq!(config.name, "Default Gym Name");
        assert_eq!(config.opening_balance, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_name_is_rejected() {
        let config = GymConfig {
            name: "   ".to_string(),
            ..GymConfig::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyGymName));
    }

    #[test]
    fn negative_opening_balance_is_rejected() {
        let config = GymConfig {
            opening_balance: -1,
            ..GymConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::NegativeOpeningBalance(-1))
        );
    }

    #[test]
    fn open_gym_uses_configured_values() {
        let config = GymConfig {
            name: "CrossFit Haifa".to_string(),
            opening_balance: 500,
        };
        let gym = config.open_gym();
        assert_eq!(gym.name(), "CrossFit Haifa");
        assert_eq!(gym.balance(), 500);
    }
}
