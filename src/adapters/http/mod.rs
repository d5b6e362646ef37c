//! HTTP adapters - REST API implementations.

pub mod ipn;

pub use ipn::{ipn_router, IpnAppState};
