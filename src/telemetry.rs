//! Tracing setup for the loaded library.
//!
//! On Android events go to logcat under [`LOG_TAG`]; stderr is discarded
//! there. Everywhere else they go to stderr through the fmt layer.

use crate::config::{NativeConfig, DEFAULT_LOG_FILTER};
use crate::error::{BridgeError, BridgeResult};
use tracing::Subscriber;
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Logcat tag. Older Android releases reject tags longer than 23 bytes.
pub const LOG_TAG: &str = "chocolateshop";

/// Parse the configured filter, falling back to the default on bad input.
pub fn build_filter(config: &NativeConfig) -> EnvFilter {
    match EnvFilter::try_new(&config.log_filter) {
        Ok(filter) => filter,
        Err(err) => {
            let err = BridgeError::from(err);
            eprintln!("{LOG_TAG}: {err}, using {DEFAULT_LOG_FILTER:?}");
            EnvFilter::new(DEFAULT_LOG_FILTER)
        }
    }
}

/// Install the global subscriber.
///
/// Fails with [`BridgeError::Telemetry`] if a subscriber is already set.
pub fn try_init(config: &NativeConfig) -> BridgeResult<()> {
    tracing_subscriber::registry()
        .with(build_filter(config))
        .with(output_layer())
        .try_init()?;
    Ok(())
}

/// Install logging once; later calls are no-ops.
pub fn init(config: &NativeConfig) {
    match try_init(config) {
        Ok(()) => tracing::debug!(filter = %config.log_filter, "logging initialised"),
        Err(BridgeError::Telemetry(_)) => {}
        Err(err) => eprintln!("{LOG_TAG}: {err}"),
    }
}

#[cfg(target_os = "android")]
fn output_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    paranoid_android::layer(LOG_TAG)
}

#[cfg(not(target_os = "android"))]
fn output_layer<S>() -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .with_writer(std::io::stderr)
}
