use std::env;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the diagnostic filter, e.g. `debug`
pub const LOG_FILTER_ENV: &str = "PHLAT_LOG";

/// Send diagnostics to stderr, filtered by `PHLAT_LOG` (default `info`).
///
/// Stdout stays reserved for the prompt and user-facing messages.
pub fn init_tracing() {
    let filter = env::var(LOG_FILTER_ENV).unwrap_or_else(|_| "info".to_string());

    fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
