//! Tracing subscriber setup for the listener binary.

use tracing::subscriber::{set_global_default, SetGlobalDefaultError};
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Builds the subscriber.
///
/// `RUST_LOG` overrides `default_filter` when set. `json` selects structured
/// JSON lines (production) over human-readable output.
pub fn get_subscriber<Sink>(
    default_filter: &str,
    json: bool,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let (json_layer, pretty_layer) = if json {
        (
            Some(fmt::layer().json().with_current_span(true).with_writer(sink)),
            None,
        )
    } else {
        (None, Some(fmt::layer().with_target(true).with_writer(sink)))
    };

    Registry::default()
        .with(env_filter)
        .with(json_layer)
        .with(pretty_layer)
}

/// Installs `subscriber` as the global default. Fails if one is already set.
pub fn init_subscriber(
    subscriber: impl Subscriber + Send + Sync,
) -> Result<(), SetGlobalDefaultError> {
    set_global_default(subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_both_formats() {
        for json in [true, false] {
            let subscriber = get_subscriber("info", json, std::io::sink);
            tracing::subscriber::with_default(subscriber, || {
                tracing::info!(txn_id = "61E67681CH3238416", "IPN verified");
            });
        }
    }
}
