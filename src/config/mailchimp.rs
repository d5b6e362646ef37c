//! Mailchimp configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Mailchimp configuration (Marketing API v3)
#[derive(Debug, Clone, Deserialize)]
pub struct MailchimpConfig {
    /// Mailchimp API key, `<key>-<datacenter>`
    pub api_key: String,

    /// Audience (list) identifier payers are enrolled in
    pub list_id: String,

    /// Explicit API base URL, overriding the datacenter derived from the key
    pub base_url: Option<String>,

    /// Timeout for the enrollment call in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl MailchimpConfig {
    /// Datacenter suffix of the API key (`us6` in `abc123-us6`).
    pub fn datacenter(&self) -> Option<&str> {
        self.api_key
            .rsplit_once('-')
            .map(|(_, dc)| dc)
            .filter(|dc| !dc.is_empty())
    }

    /// Base URL of the Marketing API, without the `/3.0` version segment.
    pub fn api_base_url(&self) -> Option<String> {
        match &self.base_url {
            Some(url) => Some(url.trim_end_matches('/').to_string()),
            None => self
                .datacenter()
                .map(|dc| format!("https://{}.api.mailchimp.com", dc)),
        }
    }

    /// Validate Mailchimp configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_key.is_empty() {
            return Err(ValidationError::MissingRequired("MAILCHIMP_API_KEY"));
        }
        if self.list_id.is_empty() {
            return Err(ValidationError::MissingRequired("MAILCHIMP_LIST_ID"));
        }
        match &self.base_url {
            Some(url) if !url.starts_with("https://") && !url.starts_with("http://") => {
                return Err(ValidationError::InvalidUrl("Mailchimp API"));
            }
            Some(_) => {}
            None if self.datacenter().is_none() => {
                return Err(ValidationError::MissingDatacenter);
            }
            None => {}
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for MailchimpConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            list_id: String::new(),
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}
