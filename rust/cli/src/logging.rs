//! Diagnostic logging for the `showdown` binary.
//!
//! Events go to stderr so they never mix with command output on stdout.
//! The filter comes from `RUST_LOG` and defaults to `warn`.

use tracing_subscriber::{EnvFilter, fmt};

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
