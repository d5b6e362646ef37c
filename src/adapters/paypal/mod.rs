//! PayPal IPN verification adapter.
//!
//! Implements the `IpnVerifier` port by posting each notification back to
//! PayPal's `webscr` endpoint with `cmd=_notify-validate` prepended.
//!
//! # Configuration
//!
//! The endpoint is chosen once at startup:
//! - `PAYPAL_IPN__PAYPAL__SANDBOX=true` selects the sandbox endpoint
//! - `PAYPAL_IPN__PAYPAL__VERIFY_URL` overrides both (used by tests)

mod mock_verifier;
mod paypal_verifier;

pub use mock_verifier::MockIpnVerifier;
pub use paypal_verifier::{PaypalIpnVerifier, PaypalVerifierConfig};
