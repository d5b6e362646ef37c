//! The status/type check narrowing IPN traffic to completed web payments.

use thiserror::Error;

use super::notification::NotificationFields;

/// `payment_status` of a payment that has cleared.
pub const COMPLETED: &str = "Completed";

/// `txn_type` of a direct "Buy Now" style payment.
pub const WEB_ACCEPT: &str = "web_accept";

/// Why a verified notification was not acted on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterRejection {
    #[error("payment status was not \"Completed\": {0}")]
    PaymentNotCompleted(String),

    #[error("transaction type was not \"web_accept\": {0}")]
    NotWebAccept(String),
}

/// Passes only `Completed` + `web_accept` notifications.
///
/// Payment status is checked before transaction type.
pub fn check(fields: &NotificationFields) -> Result<(), FilterRejection> {
    if fields.payment_status() != COMPLETED {
        return Err(FilterRejection::PaymentNotCompleted(
            fields.payment_status().to_string(),
        ));
    }
    if fields.txn_type() != WEB_ACCEPT {
        return Err(FilterRejection::NotWebAccept(fields.txn_type().to_string()));
    }
    Ok(())
}
