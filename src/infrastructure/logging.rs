//! Diagnostic logging initialization.
//!
//! Installs a `tracing` subscriber writing to stderr. The level comes from
//! `--log-level`; `RUST_LOG`, when set, overrides it.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default level when neither `--log-level` nor `RUST_LOG` is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Build the filter for `level`, preferring `RUST_LOG`
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Initialize the subscriber. Safe to call more than once; later calls
/// are ignored.
pub fn init_logging(level: &str) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(level))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .without_time(),
        )
        .try_init();
}
