//! HTTP adapter for the PayPal IPN listener.

mod handlers;
mod routes;

pub use handlers::{handle_ipn, health, IpnApiError, IpnAppState};
pub use routes::ipn_router;
