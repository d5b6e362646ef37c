//! The single terminal response an invocation produces.

use http::StatusCode;

/// Final `{status, body}` pair written back to the notifier.
///
/// The body is always the standard reason phrase of the status code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseDecision {
    status: StatusCode,
    body: String,
}

impl ResponseDecision {
    /// Builds a decision whose body is the reason phrase of `status`.
    pub fn from_status(status: StatusCode) -> Self {
        Self {
            status,
            body: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }

    /// Builds a decision from a numeric code reported by a remote service.
    ///
    /// Only error codes (400-599) with a standard reason phrase are echoed;
    /// anything else falls back to 500.
    pub fn from_code(code: u16) -> Self {
        let status = StatusCode::from_u16(code)
            .ok()
            .filter(|s| s.is_client_error() || s.is_server_error())
            .filter(|s| s.canonical_reason().is_some())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self::from_status(status)
    }

    pub fn ok() -> Self {
        Self::from_status(StatusCode::OK)
    }

    pub fn method_not_allowed() -> Self {
        Self::from_status(StatusCode::METHOD_NOT_ALLOWED)
    }

    pub fn internal_error() -> Self {
        Self::from_status(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}
