//! Diagnostic tracing for the tracker.
//!
//! Stdout carries only the listings and statistics produced by
//! [`crate::report`]; anything emitted through `tracing` (loaded counts,
//! skipped script steps, rejected input) lands on stderr instead, so
//! piping the reports into a file never mixes in diagnostics.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber once, at the top of `main`.
///
/// Filter comes from `RUST_LOG` (`warn` when unset), so
/// `RUST_LOG=steptrack=debug steptrack -i steps.txt` shows each script step.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
