//! IPN domain module.
//!
//! Decoding, authenticity interpretation, and filtering of PayPal Instant
//! Payment Notifications.
//!
//! # Module Structure
//!
//! - `notification` - Raw body and decoded fields
//! - `verification` - VERIFIED / INVALID / unexpected classification
//! - `filter` - Completed `web_accept` business filter
//! - `errors` - Faults propagated to the hosting layer

mod errors;
pub mod filter;
mod notification;
mod verification;

pub use errors::IpnError;
pub use filter::FilterRejection;
pub use notification::{NotificationFields, RawNotification, VALIDATE_COMMAND};
pub use verification::{VerificationOutcome, INVALID, VERIFIED};
