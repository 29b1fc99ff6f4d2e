//! Logging setup

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Level filter for the `--verbose` flag
#[must_use]
pub fn filter_for(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    }
}

/// Install the global subscriber. Call once, from `main`.
pub fn setup_logging(verbose: bool) {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter_for(verbose))
        .init();
}
