//! Interpretation of PayPal's verification postback response.

/// Literal PayPal answers with for an authentic notification.
pub const VERIFIED: &str = "VERIFIED";

/// Literal PayPal answers with for a forged or tampered notification.
pub const INVALID: &str = "INVALID";

/// What the verification endpoint said about a notification.
///
/// Only [`VerificationOutcome::Verified`] authenticates; the other two are
/// terminal failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    Verified,
    Invalid,
    /// Any other response text, kept verbatim for logging.
    Unexpected(String),
}

impl VerificationOutcome {
    /// Classifies the full response body. No trimming or case folding.
    pub fn from_response(body: &str) -> Self {
        match body {
            VERIFIED => VerificationOutcome::Verified,
            INVALID => VerificationOutcome::Invalid,
            other => VerificationOutcome::Unexpected(other.to_string()),
        }
    }

    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationOutcome::Verified)
    }
}
