//! Diagnostic logging setup

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over `configured`. An unparsable configured
/// filter falls back to [`DEFAULT_LOG_FILTER`].
pub fn init(configured: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    if let Err(e) = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .try_init()
    {
        eprintln!("Logging already initialized: {e}");
    }
}
