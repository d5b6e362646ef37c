//! Classification of the mailing-list result into the final response.

use crate::domain::enrollment::MemberStatus;
use crate::domain::foundation::ResponseDecision;
use crate::domain::ipn::IpnError;
use crate::ports::{MailingListError, MemberRecord};

/// Status used when a business error carries no status of its own.
pub const DEFAULT_ERROR_STATUS: u16 = 500;

/// Result of the enrollment step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrollmentOutcome {
    /// Remote returned 200 with a pending or subscribed member.
    Accepted {
        email_address: String,
        status: MemberStatus,
    },
    /// Remote returned a record that does not count as enrolled.
    NotEnrolled(MemberRecord),
    /// Remote rejected the payer's address, e.g. already a member.
    DuplicateOrBusinessError { status_code: u16, message: String },
    /// Any other failure.
    FatalError(MailingListError),
}

impl EnrollmentOutcome {
    /// Classifies the result of adding `payer_email`.
    pub fn classify(result: Result<MemberRecord, MailingListError>, payer_email: &str) -> Self {
        match result {
            Ok(record) if record.is_enrolled() => EnrollmentOutcome::Accepted {
                email_address: record.email_address,
                status: record.status,
            },
            Ok(record) => EnrollmentOutcome::NotEnrolled(record),
            Err(error) if is_address_conflict(&error, payer_email) => {
                EnrollmentOutcome::DuplicateOrBusinessError {
                    status_code: error.status_code.unwrap_or(DEFAULT_ERROR_STATUS),
                    message: error.message,
                }
            }
            Err(error) => EnrollmentOutcome::FatalError(error),
        }
    }

    /// Maps the outcome to the response, or to a fatal error for the caller
    /// to surface.
    pub fn into_decision(self) -> Result<ResponseDecision, IpnError> {
        match self {
            EnrollmentOutcome::Accepted {
                email_address,
                status,
            } => {
                tracing::info!(payer_email = %email_address, status = %status, "Payer enrolled");
                Ok(ResponseDecision::ok())
            }
            EnrollmentOutcome::NotEnrolled(record) => {
                tracing::error!(record = ?record, "Mailing list did not enroll payer");
                Ok(ResponseDecision::internal_error())
            }
            EnrollmentOutcome::DuplicateOrBusinessError {
                status_code,
                message,
            } => {
                tracing::warn!(status = status_code, detail = %message, "Mailing list rejected payer");
                Ok(ResponseDecision::from_code(status_code))
            }
            EnrollmentOutcome::FatalError(error) => Err(error.into()),
        }
    }
}

/// Whether the remote error message names the payer's address.
///
/// An empty address never matches.
pub fn is_address_conflict(error: &MailingListError, payer_email: &str) -> bool {
    !payer_email.is_empty() && error.message.contains(payer_email)
}
