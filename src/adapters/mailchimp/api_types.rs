//! Mailchimp Marketing API wire types.
//!
//! Only the fields this service reads or writes are modelled. Unknown fields
//! in responses are ignored.

use serde::{Deserialize, Serialize};

use crate::domain::enrollment::{EnrollmentRequest, MemberStatus};
use crate::ports::{FieldError, MailingListError, MemberRecord};

// ════════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════════

/// Body of `POST /lists/{list_id}/members`.
#[derive(Debug, Clone, Serialize)]
pub struct AddMemberBody {
    pub email_address: String,
    pub status: MemberStatus,
    pub merge_fields: MergeFields,
}

/// Audience merge fields written for each payer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergeFields {
    #[serde(rename = "FNAME")]
    pub first_name: String,

    #[serde(rename = "LNAME")]
    pub last_name: String,

    /// ISO-8601 UTC with milliseconds.
    #[serde(rename = "JOINED")]
    pub joined: String,

    /// ISO-8601 UTC with milliseconds.
    #[serde(rename = "EXPIRES")]
    pub expires: String,
}

impl From<&EnrollmentRequest> for AddMemberBody {
    fn from(request: &EnrollmentRequest) -> Self {
        Self {
            email_address: request.email_address.clone(),
            status: request.status(),
            merge_fields: MergeFields {
                first_name: request.first_name.clone(),
                last_name: request.last_name.clone(),
                joined: request.joined_at.to_iso8601(),
                expires: request.expires_at.to_iso8601(),
            },
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════════

/// List member as returned on success.
#[derive(Debug, Clone, Deserialize)]
pub struct MailchimpMember {
    pub id: Option<String>,
    #[serde(default)]
    pub email_address: String,
    #[serde(default)]
    pub status: MemberStatus,
}

impl MailchimpMember {
    pub fn into_record(self, status_code: u16) -> MemberRecord {
        MemberRecord {
            status_code,
            id: self.id,
            email_address: self.email_address,
            status: self.status,
            raw_body: None,
        }
    }
}

/// Problem details (RFC 7807) returned on every error.
#[derive(Debug, Clone, Deserialize)]
pub struct ProblemDetail {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub title: Option<String>,
    pub status: Option<u16>,
    pub detail: Option<String>,
    pub instance: Option<String>,
    #[serde(default)]
    pub errors: Vec<ProblemFieldError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProblemFieldError {
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub message: String,
}

impl ProblemDetail {
    /// Converts to a port error. `http_status` is used when the body omits one.
    pub fn into_error(self, http_status: u16) -> MailingListError {
        let message = self
            .detail
            .or_else(|| self.title.clone())
            .unwrap_or_else(|| format!("Mailchimp returned HTTP {}", http_status));

        let mut error = MailingListError::api(Some(self.status.unwrap_or(http_status)), message)
            .with_errors(
                self.errors
                    .into_iter()
                    .map(|e| FieldError {
                        field: e.field,
                        message: e.message,
                    })
                    .collect(),
            );
        if let Some(title) = self.title {
            error = error.with_title(title);
        }
        error
    }
}
