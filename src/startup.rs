//! Wiring of configuration, adapters and the HTTP server.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::adapters::http::{ipn_router, IpnAppState};
use crate::adapters::{MailchimpAdapter, MailchimpClientConfig, PaypalIpnVerifier, PaypalVerifierConfig};
use crate::config::{AppConfig, ConfigError, ValidationError};

/// Failures before the server starts accepting notifications.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Failed to install tracing subscriber: {0}")]
    Telemetry(#[from] tracing::subscriber::SetGlobalDefaultError),

    #[error("Server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Builds the real PayPal and Mailchimp adapters from configuration.
pub fn build_state(config: &AppConfig) -> Result<IpnAppState, StartupError> {
    let verifier = PaypalIpnVerifier::new(PaypalVerifierConfig::from_config(&config.paypal))?;
    let mailing_list = MailchimpAdapter::new(MailchimpClientConfig::from_config(&config.mailchimp)?)?;

    Ok(IpnAppState::new(
        Arc::new(verifier),
        Arc::new(mailing_list),
        config.paypal.sandbox,
    ))
}

/// Router with request tracing and a per-request timeout.
pub fn app(state: IpnAppState, request_timeout: Duration) -> Router {
    ipn_router()
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves `app` until Ctrl-C.
pub async fn run(listener: TcpListener, app: Router) -> Result<(), StartupError> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
