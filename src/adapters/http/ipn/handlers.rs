//! HTTP handlers for the IPN listener.
//!
//! These handlers connect Axum routes to the IPN command handler.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;

use crate::application::handlers::ipn::{
    HandleIpnNotificationCommand, HandleIpnNotificationHandler,
};
use crate::domain::ipn::IpnError;
use crate::ports::{IpnVerifier, MailingList};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for the IPN routes.
///
/// Cloned per request; holds Arc-wrapped adapters and the immutable sandbox
/// flag read at startup.
#[derive(Clone)]
pub struct IpnAppState {
    pub verifier: Arc<dyn IpnVerifier>,
    pub mailing_list: Arc<dyn MailingList>,
    pub sandbox: bool,
}

impl IpnAppState {
    pub fn new(
        verifier: Arc<dyn IpnVerifier>,
        mailing_list: Arc<dyn MailingList>,
        sandbox: bool,
    ) -> Self {
        Self {
            verifier,
            mailing_list,
            sandbox,
        }
    }

    /// Create the handler from the shared state.
    pub fn ipn_handler(&self) -> HandleIpnNotificationHandler {
        HandleIpnNotificationHandler::new(self.verifier.clone(), self.mailing_list.clone())
            .with_sandbox(self.sandbox)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// ANY /api/ipn - Receive a PayPal IPN notification
///
/// Accepts every method so the handler can answer non-POST requests with 405.
pub async fn handle_ipn(
    State(state): State<IpnAppState>,
    method: Method,
    body: Bytes,
) -> Result<impl IntoResponse, IpnApiError> {
    let handler = state.ipn_handler();
    let cmd = HandleIpnNotificationCommand {
        method,
        payload: body.to_vec(),
    };

    let decision = handler.handle(cmd).await?;

    Ok((decision.status(), decision.body().to_string()))
}

/// GET /health - Liveness check
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts pipeline faults to HTTP responses.
#[derive(Debug)]
pub struct IpnApiError(IpnError);

impl From<IpnError> for IpnApiError {
    fn from(err: IpnError) -> Self {
        Self(err)
    }
}

impl IntoResponse for IpnApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            IpnError::EnrollmentFailed { status_code, message } => {
                tracing::error!(
                    status_code = ?status_code,
                    error = %message,
                    "IPN processing failed"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = status.canonical_reason().unwrap_or_default().to_string();
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mailchimp::MockMailingList;
    use crate::adapters::paypal::MockIpnVerifier;

    fn state(verifier: MockIpnVerifier, mailing_list: MockMailingList) -> IpnAppState {
        IpnAppState::new(Arc::new(verifier), Arc::new(mailing_list), false)
    }

    #[tokio::test]
    async fn handler_returns_decision_as_status_and_reason() {
        let response = handle_ipn(
            State(state(MockIpnVerifier::invalid(), MockMailingList::new())),
            Method::POST,
            Bytes::from_static(b"txn_id=1"),
        )
        .await
        .unwrap()
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn fatal_error_maps_to_500() {
        let response = IpnApiError::from(IpnError::enrollment_failed(Some(401), "bad key"))
            .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
