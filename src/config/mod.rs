//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `GYM` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use gym_management::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! config.logging.init_tracing();
//!
//! let gym = config.gym.open_gym();
//! println!("Opened {}", gym.name());
//! ```

mod error;
mod gym;
mod logging;

pub use error::{ConfigError, ValidationError};
pub use gym::GymConfig;
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Facility configuration (name, opening balance)
    #[serde(default)]
    pub gym: GymConfig,

    /// Logging configuration (filter, format)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `GYM` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `GYM__GYM__NAME=CrossFit` -> `gym.name = "CrossFit"`
    /// - `GYM__LOGGING__FORMAT=json` -> `logging.format = Json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("GYM")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.gym.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("GYM__GYM__NAME");
        env::remove_var("GYM__GYM__OPENING_BALANCE");
        env::remove_var("GYM__LOGGING__FILTER");
        env::remove_var("GYM__LOGGING__FORMAT");
    }

    #[test]
    fn test_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.gym.name, "Default Gym Name");
        assert_eq!(config.gym.opening_balance, 0);
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("GYM__GYM__NAME", "CrossFit Haifa");
        env::set_var("GYM__GYM__OPENING_BALANCE", "2500");
        env::set_var("GYM__LOGGING__FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.gym.name, "CrossFit Haifa");
        assert_eq!(config.gym.opening_balance, 2500);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_negative_opening_balance_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("GYM__GYM__OPENING_BALANCE", "-10");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::NegativeOpeningBalance(-10))
        );
    }

    #[test]
    fn test_unparseable_value_is_a_load_error() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("GYM__GYM__OPENING_BALANCE", "plenty");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
