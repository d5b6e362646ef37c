//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (timestamps, response decisions)
//! - `ipn` - Notification decoding, verification outcome, business filter
//! - `enrollment` - Mailing-list enrollment derived from a payment

pub mod enrollment;
pub mod foundation;
pub mod ipn;
