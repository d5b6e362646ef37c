//! PayPal IPN verification configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Production postback URL.
pub const PRODUCTION_VERIFY_URL: &str = "https://ipnpb.paypal.com/cgi-bin/webscr";

/// Sandbox postback URL.
pub const SANDBOX_VERIFY_URL: &str = "https://ipnpb.sandbox.paypal.com/cgi-bin/webscr";

/// PayPal configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PaypalConfig {
    /// Post notifications back to the sandbox endpoint instead of production
    #[serde(default)]
    pub sandbox: bool,

    /// Explicit verification URL, overriding the sandbox/production choice
    pub verify_url: Option<String>,

    /// Timeout for the verification round-trip in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl PaypalConfig {
    /// Endpoint the verification round-trip posts to.
    pub fn verify_url(&self) -> &str {
        match &self.verify_url {
            Some(url) => url,
            None if self.sandbox => SANDBOX_VERIFY_URL,
            None => PRODUCTION_VERIFY_URL,
        }
    }

    /// Validate PayPal configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(url) = &self.verify_url {
            if !url.starts_with("https://") && !url.starts_with("http://") {
                return Err(ValidationError::InvalidUrl("PayPal verify"));
            }
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for PaypalConfig {
    fn default() -> Self {
        Self {
            sandbox: false,
            verify_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}
