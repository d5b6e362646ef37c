//! PayPal IPN verifier adapter.
//!
//! Implements the `IpnVerifier` trait against PayPal's `webscr` endpoint.
//!
//! # Protocol
//!
//! The notification body is echoed back byte for byte after
//! `cmd=_notify-validate&`. PayPal answers with the literal text `VERIFIED`
//! or `INVALID`.
//!
//! # Configuration
//!
//! ```ignore
//! let config = PaypalVerifierConfig::from_config(&app_config.paypal);
//! let verifier = PaypalIpnVerifier::new(config)?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

use crate::config::{PaypalConfig, PRODUCTION_VERIFY_URL};
use crate::domain::ipn::{RawNotification, VerificationOutcome};
use crate::ports::{IpnVerifier, VerificationError, VerificationErrorCode};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Default round-trip timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// PayPal verification endpoint configuration.
#[derive(Debug, Clone)]
pub struct PaypalVerifierConfig {
    /// Full URL of the `webscr` endpoint.
    verify_url: String,

    /// Timeout for the whole round-trip.
    timeout: Duration,
}

impl PaypalVerifierConfig {
    /// Create a configuration for the given endpoint.
    pub fn new(verify_url: impl Into<String>) -> Self {
        Self {
            verify_url: verify_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Build from application configuration.
    ///
    /// The sandbox flag and URL override are resolved here, once.
    pub fn from_config(config: &PaypalConfig) -> Self {
        Self::new(config.verify_url()).with_timeout(Duration::from_secs(config.timeout_secs))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn verify_url(&self) -> &str {
        &self.verify_url
    }
}

impl Default for PaypalVerifierConfig {
    fn default() -> Self {
        Self::new(PRODUCTION_VERIFY_URL)
    }
}

/// PayPal IPN verifier.
///
/// Implements `IpnVerifier` with a single POST per notification.
pub struct PaypalIpnVerifier {
    config: PaypalVerifierConfig,
    http_client: reqwest::Client,
}

impl PaypalIpnVerifier {
    /// Create a new verifier with the given configuration.
    pub fn new(config: PaypalVerifierConfig) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }
}

#[async_trait]
impl IpnVerifier for PaypalIpnVerifier {
    async fn verify(
        &self,
        notification: &RawNotification,
    ) -> Result<VerificationOutcome, VerificationError> {
        let response = self
            .http_client
            .post(&self.config.verify_url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(notification.verification_body())
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(
                    verify_url = %self.config.verify_url,
                    error = %e,
                    "IPN verification request failed"
                );
                VerificationError::network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                verify_url = %self.config.verify_url,
                status = status.as_u16(),
                "IPN verification endpoint returned an error status"
            );
            return Err(VerificationError::http_status(status.as_u16()));
        }

        let body = response.text().await.map_err(|e| {
            VerificationError::new(VerificationErrorCode::InvalidResponse, e.to_string())
        })?;

        Ok(VerificationOutcome::from_response(&body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const BODY: &str = "payment_status=Completed&txn_type=web_accept&payer_email=ada%40example.com";

    fn verifier_for(server: &MockServer) -> PaypalIpnVerifier {
        let config = PaypalVerifierConfig::new(format!("{}/cgi-bin/webscr", server.uri()))
            .with_timeout(Duration::from_secs(2));
        PaypalIpnVerifier::new(config).unwrap()
    }

    async fn respond_with(server: &MockServer, template: ResponseTemplate) {
        Mock::given(method("POST"))
            .and(path("/cgi-bin/webscr"))
            .respond_with(template)
            .mount(server)
            .await;
    }

    #[test]
    fn default_config_targets_production() {
        assert_eq!(
            PaypalVerifierConfig::default().verify_url(),
            "https://ipnpb.paypal.com/cgi-bin/webscr"
        );
    }

    #[test]
    fn from_config_honours_sandbox_flag() {
        let config = PaypalConfig {
            sandbox: true,
            ..PaypalConfig::default()
        };
        assert_eq!(
            PaypalVerifierConfig::from_config(&config).verify_url(),
            "https://ipnpb.sandbox.paypal.com/cgi-bin/webscr"
        );
    }

    #[tokio::test]
    async fn posts_validate_command_followed_by_raw_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/cgi-bin/webscr"))
            .and(header("content-type", FORM_CONTENT_TYPE))
            .and(body_string(format!("cmd=_notify-validate&{}", BODY)))
            .respond_with(ResponseTemplate::new(200).set_body_string("VERIFIED"))
            .expect(1)
            .mount(&server)
            .await;

        let verifier = verifier_for(&server);
        let outcome = verifier.verify(&RawNotification::new(BODY)).await.unwrap();

        assert_eq!(outcome, VerificationOutcome::Verified);
    }

    #[tokio::test]
    async fn raw_bytes_are_not_re_encoded() {
        let raw = "first_name=Jos%E9&memo=a+b%2Bc&payer_email=ada%40example.com";
        let server = MockServer::start().await;
        respond_with(&server, ResponseTemplate::new(200).set_body_string("VERIFIED")).await;

        let verifier = verifier_for(&server);
        verifier.verify(&RawNotification::new(raw)).await.unwrap();

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].body,
            format!("cmd=_notify-validate&{}", raw).into_bytes()
        );
    }

    #[tokio::test]
    async fn invalid_literal_is_reported() {
        let server = MockServer::start().await;
        respond_with(&server, ResponseTemplate::new(200).set_body_string("INVALID")).await;

        let verifier = verifier_for(&server);
        let outcome = verifier.verify(&RawNotification::new(BODY)).await.unwrap();

        assert_eq!(outcome, VerificationOutcome::Invalid);
    }

    #[tokio::test]
    async fn other_text_is_unexpected() {
        let server = MockServer::start().await;
        respond_with(&server, ResponseTemplate::new(200).set_body_string("VERIFIED\n")).await;

        let verifier = verifier_for(&server);
        let outcome = verifier.verify(&RawNotification::new(BODY)).await.unwrap();

        assert_eq!(
            outcome,
            VerificationOutcome::Unexpected("VERIFIED\n".to_string())
        );
    }

    #[tokio::test]
    async fn error_status_is_an_error() {
        let server = MockServer::start().await;
        respond_with(&server, ResponseTemplate::new(503).set_body_string("VERIFIED")).await;

        let verifier = verifier_for(&server);
        let err = verifier
            .verify(&RawNotification::new(BODY))
            .await
            .unwrap_err();

        assert_eq!(err.code, VerificationErrorCode::HttpStatus(503));
    }

    #[tokio::test]
    async fn timeout_is_a_network_error() {
        let server = MockServer::start().await;
        respond_with(
            &server,
            ResponseTemplate::new(200)
                .set_body_string("VERIFIED")
                .set_delay(Duration::from_secs(5)),
        )
        .await;

        let config = PaypalVerifierConfig::new(format!("{}/cgi-bin/webscr", server.uri()))
            .with_timeout(Duration::from_millis(200));
        let verifier = PaypalIpnVerifier::new(config).unwrap();
        let err = verifier
            .verify(&RawNotification::new(BODY))
            .await
            .unwrap_err();

        assert_eq!(err.code, VerificationErrorCode::NetworkError);
    }
}
