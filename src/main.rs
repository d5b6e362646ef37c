use std::time::Duration;

use tokio::net::TcpListener;

use paypal_ipn::config::AppConfig;
use paypal_ipn::startup::{app, build_state, run, StartupError};
use paypal_ipn::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let config = AppConfig::load()?;
    config.validate()?;

    let subscriber = get_subscriber(
        &config.server.log_level,
        config.is_production(),
        std::io::stdout,
    );
    init_subscriber(subscriber)?;

    let state = build_state(&config)?;
    let app = app(state, Duration::from_secs(config.server.request_timeout_secs));

    let addr = config.server.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        sandbox = config.paypal.sandbox,
        environment = ?config.server.environment,
        "PayPal IPN listener started"
    );

    run(listener, app).await
}
