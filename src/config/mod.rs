//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PAYPAL_IPN` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use paypal_ipn::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Posting IPN verifications to {}", config.paypal.verify_url());
//! ```

mod error;
mod mailchimp;
mod paypal;
mod server;

pub use error::{ConfigError, ValidationError};
pub use mailchimp::MailchimpConfig;
pub use paypal::{PaypalConfig, PRODUCTION_VERIFY_URL, SANDBOX_VERIFY_URL};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Built once at process start and never mutated afterwards. Load using
/// [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// IPN verification endpoint selection
    #[serde(default)]
    pub paypal: PaypalConfig,

    /// Mailing list credentials and audience
    pub mailchimp: MailchimpConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PAYPAL_IPN` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PAYPAL_IPN__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `PAYPAL_IPN__PAYPAL__SANDBOX=true` -> `paypal.sandbox = true`
    /// - `PAYPAL_IPN__MAILCHIMP__LIST_ID=...` -> `mailchimp.list_id = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Required environment variables are missing
    /// - Values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PAYPAL_IPN")
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
        self.server.validate()?;
        self.paypal.validate()?;
        self.mailchimp.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
