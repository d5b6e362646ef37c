//! PayPal IPN listener.
//!
//! Verifies PayPal Instant Payment Notifications with PayPal and enrolls the
//! payers of completed web payments as pending members of a Mailchimp
//! audience.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod startup;
pub mod telemetry;
