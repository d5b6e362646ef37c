//! Application handlers.
//!
//! Command handlers that orchestrate domain operations across ports.

pub mod ipn;

pub use ipn::{
    is_address_conflict, EnrollmentOutcome, HandleIpnNotificationCommand,
    HandleIpnNotificationHandler,
};
