//! Logger setup and error reporting
//!
//! Internal events are emitted through `tracing`, which forwards to the `log`
//! facade when no subscriber is installed; `env_logger` prints them.

use super::types::Error;
use log::{debug, error};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Install `env_logger` for error reports, once per process.
///
/// A logger installed earlier by the host application is left in place.
/// Levels come from `RUST_LOG`, for example:
/// - `RUST_LOG=error` - only [`log_error`] reports
/// - `RUST_LOG=cryypt_errors=trace` - every capture and resolution event
pub fn init() {
    INIT_LOGGER.call_once(|| {
        match env_logger::Builder::from_default_env()
            .format_timestamp_micros()
            .try_init()
        {
            Ok(()) => debug!("error reporting logger installed"),
            Err(err) => debug!("keeping the existing logger for error reports: {err}"),
        }
    });
}

/// Initialize logging for test binaries; safe to call from every test
pub fn init_test() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}

/// Log `err` with its call path as a single record
pub fn log_error(operation: &str, err: &Error) {
    error!("{operation} failed: {err:#}");
}
