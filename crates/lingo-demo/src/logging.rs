//! Tracing subscriber setup driven by [`LoggingConfig`].

use crate::error::{DemoError, DemoResult};
use lingo_config::LoggingConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the filter: `RUST_LOG` wins, then the configured level.
pub fn env_filter(config: &LoggingConfig) -> DemoResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level).map_err(|e| DemoError::Logging(e.to_string()))
}

/// Install the global subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> DemoResult<()> {
    let registry = tracing_subscriber::registry().with(env_filter(config)?);

    let result = if config.json {
        registry.with(fmt::layer().json().with_target(true)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };

    result.map_err(|e| DemoError::Logging(e.to_string()))
}
