//! Tracing subscriber setup.
//!
//! The terminal belongs to the shell's viewport, so diagnostics go to a
//! log file instead of stdout. Filtering follows `RUST_LOG` with an INFO
//! default.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the global subscriber with file logging.
///
/// Returns false if the log file could not be created; the shell runs on
/// without diagnostics rather than refusing to start.
pub fn init_global(log_file_path: &Path) -> bool {
    let Ok(log_file) = File::create(log_file_path) else {
        return false;
    };
    build_subscriber(log_file).init();
    true
}

/// Build the file-logging subscriber; shared between production and tests.
pub fn build_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(Arc::new(log_file))
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
}
