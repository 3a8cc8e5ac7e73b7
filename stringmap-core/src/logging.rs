//! Structured logging using **tracing**.
//!
//! The library only emits events; the binary decides where they go by
//! installing a subscriber once at startup.

use tracing::{error, info};

/// Initializes the global tracing subscriber.
///
/// Call *once* at the beginning of the application's runtime. Events go to
/// stderr so stdout stays clean for generated output, either as
/// human-readable lines or as JSON objects.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls log filtering (e.g., `RUST_LOG=stringmap_core=debug`)
pub fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::from_default_env();
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_ansi(false)
            .with_level(true)
            .with_target(true)
            .with_current_span(true)
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_target(false)
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Logs an info event.
pub fn log_info(message: &str) {
    info!(detail = %message);
}

/// Logs an error event.
pub fn log_error(message: &str) {
    error!(detail = %message);
}
