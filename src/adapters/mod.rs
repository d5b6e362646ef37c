//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `paypal` - IPN verification round-trip
//! - `mailchimp` - Mailing list enrollment
//! - `http` - Axum routes for the listener

pub mod http;
pub mod mailchimp;
pub mod paypal;

pub use mailchimp::{MailchimpAdapter, MailchimpClientConfig};
pub use paypal::{PaypalIpnVerifier, PaypalVerifierConfig};
