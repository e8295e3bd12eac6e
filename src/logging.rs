//! Diagnostic logging setup (`tracing` + `tracing-subscriber`).
//!
//! User-facing output goes through `ui::messages`; this layer only carries
//! diagnostics to stderr. `RUST_LOG` wins over the configured level.

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global subscriber.
///
/// `level` is the fallback filter used when `RUST_LOG` is unset or invalid,
/// e.g. `warn` or `laps=debug`.
pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second init (e.g. from tests) is not an error worth reporting.
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Verbose subscriber wired to the test harness output.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
