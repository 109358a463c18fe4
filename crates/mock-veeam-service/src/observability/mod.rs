//! Logging setup for the mock server.
//!
//! The log file is a first-class output: the test driver greps it for
//! specific phrases after the run. Every line is written both to stdout
//! and to the configured file. The file is truncated at startup, so it
//! exists and is readable as soon as the server answers its first health
//! check.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with a stdout layer and a file layer.
///
/// Truncates (or creates) `log_file` before installing the subscriber.
/// Fails if the file cannot be created; startup must abort in that case.
pub fn init_logging(log_file: &Path) -> Result<(), io::Error> {
    let file = File::create(log_file)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mock_veeam_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Arc::new(file)),
        )
        .init();

    Ok(())
}
