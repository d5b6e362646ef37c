//! Faults the IPN pipeline cannot turn into an ordinary response.

use thiserror::Error;

/// Errors that escape the notification handler.
///
/// Everything expected (bad method, failed verification, filtered events,
/// address conflicts) is answered with a [`ResponseDecision`]; only these
/// reach the hosting layer.
///
/// [`ResponseDecision`]: crate::domain::foundation::ResponseDecision
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IpnError {
    /// The mailing list rejected the enrollment in a way that is not a known
    /// per-address business outcome.
    #[error("Mailing list enrollment failed unexpectedly: {message}")]
    EnrollmentFailed {
        status_code: Option<u16>,
        message: String,
    },
}

impl IpnError {
    pub fn enrollment_failed(status_code: Option<u16>, message: impl Into<String>) -> Self {
        IpnError::EnrollmentFailed {
            status_code,
            message: message.into(),
        }
    }
}
