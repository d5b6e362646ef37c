//! Mock IPN verifier for testing.
//!
//! Supports a pre-configured verdict, error injection and call tracking.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::ipn::{RawNotification, VerificationOutcome};
use crate::ports::{IpnVerifier, VerificationError};

/// Mock IPN verifier for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockIpnVerifier::invalid();
/// let outcome = mock.verify(&raw).await?;
/// assert_eq!(mock.posted_bodies().len(), 1);
/// ```
#[derive(Clone)]
pub struct MockIpnVerifier {
    inner: Arc<Mutex<MockState>>,
}

struct MockState {
    /// What the next call returns.
    response: Result<VerificationOutcome, VerificationError>,

    /// Verification bodies that would have been posted, in call order.
    posted: Vec<Vec<u8>>,
}

impl MockIpnVerifier {
    /// Verifier that answers `VERIFIED`.
    pub fn verified() -> Self {
        Self::with_response(Ok(VerificationOutcome::Verified))
    }

    /// Verifier that answers `INVALID`.
    pub fn invalid() -> Self {
        Self::with_response(Ok(VerificationOutcome::Invalid))
    }

    /// Verifier that answers with arbitrary text.
    pub fn responding(text: impl AsRef<str>) -> Self {
        Self::with_response(Ok(VerificationOutcome::from_response(text.as_ref())))
    }

    /// Verifier whose round-trip fails.
    pub fn failing(error: VerificationError) -> Self {
        Self::with_response(Err(error))
    }

    fn with_response(response: Result<VerificationOutcome, VerificationError>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(MockState {
                response,
                posted: Vec::new(),
            })),
        }
    }

    /// Number of verification round-trips attempted.
    pub fn call_count(&self) -> usize {
        self.inner.lock().unwrap().posted.len()
    }

    /// Verification bodies, in call order.
    pub fn posted_bodies(&self) -> Vec<Vec<u8>> {
        self.inner.lock().unwrap().posted.clone()
    }
}

impl Default for MockIpnVerifier {
    fn default() -> Self {
        Self::verified()
    }
}

#[async_trait]
impl IpnVerifier for MockIpnVerifier {
    async fn verify(
        &self,
        notification: &RawNotification,
    ) -> Result<VerificationOutcome, VerificationError> {
        let mut state = self.inner.lock().unwrap();
        state.posted.push(notification.verification_body());
        state.response.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_verification_bodies() {
        let mock = MockIpnVerifier::verified();

        let outcome = mock
            .verify(&RawNotification::new("txn_id=1"))
            .await
            .unwrap();

        assert!(outcome.is_verified());
        assert_eq!(mock.posted_bodies(), vec![b"cmd=_notify-validate&txn_id=1".to_vec()]);
    }

    #[tokio::test]
    async fn injected_error_is_returned() {
        let mock = MockIpnVerifier::failing(VerificationError::network("refused"));

        let result = mock.verify(&RawNotification::new("")).await;

        assert!(result.is_err());
        assert_eq!(mock.call_count(), 1);
    }
}
