//! Axum router configuration for the IPN listener.

use axum::{
    routing::{any, get},
    Router,
};

use super::handlers::{handle_ipn, health, IpnAppState};

/// Create the IPN router.
///
/// # Routes
/// - `ANY /api/ipn` - PayPal IPN listener (non-POST answers 405)
/// - `ANY /` - Same listener, for IPN URLs configured without a path
/// - `GET /health` - Liveness check
pub fn ipn_router() -> Router<IpnAppState> {
    Router::new()
        .route("/", any(handle_ipn))
        .route("/api/ipn", any(handle_ipn))
        .route("/health", get(health))
}
