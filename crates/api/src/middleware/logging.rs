//! Logging initialization.

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use crate::config::LoggingConfig;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set. Format is `json`
/// (production default, one object per line) or `pretty` for local runs.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);

    if config.format == "json" {
        builder.json().with_current_span(true).init();
    } else {
        builder.pretty().init();
    }
}
