//! Diagnostic logging bootstrap
//!
//! Diagnostics go to stderr through the `log` facade so that they never mix
//! with the menu and results printed on stdout.

use flexi_logger::{Logger, LoggerHandle};
use log::info;

/// Start the stderr logger at `level`
///
/// The returned handle must be kept alive for as long as logging is wanted.
///
/// # Errors
///
/// Returns a human-readable message when the level spec is invalid or the
/// backend cannot be started (for example, a logger is already installed).
pub fn init_logging(level: &str) -> Result<LoggerHandle, String> {
    let handle = Logger::try_with_str(level)
        .map_err(|err| format!("invalid log level `{level}`: {err}"))?
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|err| format!("failed to start logger: {err}"))?;

    info!(
        "event=logging_init level={} version={}",
        level,
        env!("CARGO_PKG_VERSION")
    );
    Ok(handle)
}
