//! Diagnostic logging setup.
//!
//! Logs go to stderr so that fragments printed with `--stdout` can be
//! piped without interference.

use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is not set.
#[must_use]
pub const fn default_filter(verbose: bool) -> &'static str {
    if verbose { "clash_groups=debug" } else { "warn" }
}

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `verbose`. Calling this more than once
/// is harmless; later calls leave the first subscriber in place.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
