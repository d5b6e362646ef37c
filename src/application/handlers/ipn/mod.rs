//! IPN command handler and the classification of its enrollment result.

mod enrollment_outcome;
mod handle_ipn_notification;

pub use enrollment_outcome::{is_address_conflict, EnrollmentOutcome, DEFAULT_ERROR_STATUS};
pub use handle_ipn_notification::{HandleIpnNotificationCommand, HandleIpnNotificationHandler};
