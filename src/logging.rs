//! Logging setup for the server binary.
//!
//! Installs a `tracing-subscriber` registry with an [`EnvFilter`] and a
//! formatting layer on stdout. `RUST_LOG` overrides the default filter.

use std::io::{self, IsTerminal};

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info,salary_engine=debug";

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
pub fn make_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the global subscriber.
///
/// Colours are only emitted when stdout is a terminal. Calling this twice
/// is harmless; the second installation is ignored.
pub fn init_logging() {
    let layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_ansi(io::stdout().is_terminal());

    // try_init fails only if a global subscriber is already set
    let _ = tracing_subscriber::registry()
        .with(make_filter())
        .with(layer)
        .try_init();
}
