//! The enrollment derived from a verified payment.

use crate::domain::foundation::Timestamp;
use crate::domain::ipn::NotificationFields;

use super::member_status::MemberStatus;

/// Length of the membership granted by one payment, in calendar years.
pub const MEMBERSHIP_TERM_YEARS: u32 = 5;

/// Add-or-update request for one payer, always as a pending member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentRequest {
    pub email_address: String,
    pub first_name: String,
    pub last_name: String,
    pub joined_at: Timestamp,
    pub expires_at: Timestamp,
}

impl EnrollmentRequest {
    /// Builds the request for the payer of `fields`, joining at `joined_at`
    /// and expiring [`MEMBERSHIP_TERM_YEARS`] calendar years later.
    pub fn from_notification(fields: &NotificationFields, joined_at: Timestamp) -> Self {
        Self {
            email_address: fields.payer_email().to_string(),
            first_name: fields.first_name().to_string(),
            last_name: fields.last_name().to_string(),
            joined_at,
            expires_at: joined_at.add_years(MEMBERSHIP_TERM_YEARS),
        }
    }

    /// Status requested for the member.
    pub fn status(&self) -> MemberStatus {
        MemberStatus::Pending
    }
}
