//! IPN verifier port for the authenticity round-trip.
//!
//! Implementations post the untouched notification body back to the payment
//! provider, prefixed with the validation command, and report its verdict.

use async_trait::async_trait;

use crate::domain::ipn::{RawNotification, VerificationOutcome};

/// Port for confirming a notification with the provider that sent it.
#[async_trait]
pub trait IpnVerifier: Send + Sync {
    /// Posts `cmd=_notify-validate&<raw body>` to the verification endpoint
    /// and classifies the literal response text.
    ///
    /// Transport failures and non-success HTTP statuses are errors; the
    /// caller treats them as not verified.
    async fn verify(
        &self,
        notification: &RawNotification,
    ) -> Result<VerificationOutcome, VerificationError>;
}

/// Failure to obtain a verdict at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationError {
    pub code: VerificationErrorCode,
    pub message: String,
}

impl VerificationError {
    pub fn new(code: VerificationErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(VerificationErrorCode::NetworkError, message)
    }

    /// Create an error for a non-success HTTP status.
    pub fn http_status(status: u16) -> Self {
        Self::new(
            VerificationErrorCode::HttpStatus(status),
            format!("verification endpoint returned HTTP {}", status),
        )
    }
}

impl std::fmt::Display for VerificationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for VerificationError {}

/// Verification error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationErrorCode {
    /// Connection, TLS, or timeout failure.
    NetworkError,

    /// Endpoint answered with a non-2xx status.
    HttpStatus(u16),

    /// Response body could not be read.
    InvalidResponse,
}

impl std::fmt::Display for VerificationErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerificationErrorCode::NetworkError => write!(f, "network_error"),
            VerificationErrorCode::HttpStatus(status) => write!(f, "http_status_{}", status),
            VerificationErrorCode::InvalidResponse => write!(f, "invalid_response"),
        }
    }
}
