//! Mailing list port for enrolling payers.
//!
//! Defines the contract for mailing-list integrations (e.g., Mailchimp).
//!
//! # Design
//!
//! - **Upsert by email**: adding an address that is already present must not
//!   create a second member, so replays of the same notification are safe
//! - **Errors keep the remote wording**: the message text is what tells an
//!   address conflict apart from an integration failure

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::enrollment::{EnrollmentRequest, MemberStatus};
use crate::domain::ipn::IpnError;

/// Port for mailing-list integrations.
#[async_trait]
pub trait MailingList: Send + Sync {
    /// Add the payer as a pending member.
    ///
    /// Returns the member as the list now holds it.
    async fn add_pending_member(
        &self,
        request: &EnrollmentRequest,
    ) -> Result<MemberRecord, MailingListError>;
}

/// A list member as reported back by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    /// HTTP status of the call that produced this record.
    pub status_code: u16,

    /// Provider's member ID.
    pub id: Option<String>,

    /// Member email address.
    pub email_address: String,

    /// Current member status. `Unknown` when the provider did not say.
    pub status: MemberStatus,

    /// Response body, kept when it could not be read as a member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_body: Option<String>,
}

impl MemberRecord {
    /// Record for a success response whose body is not a member.
    pub fn unreadable(status_code: u16, raw_body: impl Into<String>) -> Self {
        Self {
            status_code,
            id: None,
            email_address: String::new(),
            status: MemberStatus::Unknown,
            raw_body: Some(raw_body.into()),
        }
    }

    /// Whether the call succeeded with an enrolled (pending or subscribed) member.
    pub fn is_enrolled(&self) -> bool {
        self.status_code == 200 && self.status.is_enrolled()
    }
}

/// Field-level detail attached to a provider error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Errors from mailing-list operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailingListError {
    /// Error code for categorization.
    pub code: MailingListErrorCode,

    /// HTTP status reported by the provider (if any).
    pub status_code: Option<u16>,

    /// Short provider title, e.g. "Member Exists".
    pub title: Option<String>,

    /// Human-readable message as worded by the provider.
    pub message: String,

    /// Field-level details.
    pub errors: Vec<FieldError>,
}

impl MailingListError {
    /// Create a new mailing list error.
    pub fn new(code: MailingListErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            status_code: None,
            title: None,
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// Create an API error from the provider's problem report.
    pub fn api(status_code: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status_code,
            ..Self::new(MailingListErrorCode::ApiError, message)
        }
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(MailingListErrorCode::NetworkError, message)
    }

    /// Create an error for a response that could not be understood.
    pub fn invalid_response(status_code: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status_code,
            ..Self::new(MailingListErrorCode::InvalidResponse, message)
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_errors(mut self, errors: Vec<FieldError>) -> Self {
        self.errors = errors;
        self
    }
}

impl std::fmt::Display for MailingListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for MailingListError {}

impl From<MailingListError> for IpnError {
    fn from(err: MailingListError) -> Self {
        IpnError::enrollment_failed(err.status_code, err.to_string())
    }
}

/// Mailing list error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailingListErrorCode {
    /// Provider answered with an error report.
    ApiError,

    /// Network connectivity issue.
    NetworkError,

    /// Response body could not be parsed.
    InvalidResponse,
}

impl std::fmt::Display for MailingListErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MailingListErrorCode::ApiError => "api_error",
            MailingListErrorCode::NetworkError => "network_error",
            MailingListErrorCode::InvalidResponse => "invalid_response",
        };
        write!(f, "{}", s)
    }
}
