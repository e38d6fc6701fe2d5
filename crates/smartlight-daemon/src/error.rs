//! Daemon error types.

use thiserror::Error;

/// Errors that stop the daemon.
///
/// Bad input lines never end up here; the runtime logs and skips them.
#[derive(Debug, Error)]
pub enum DaemonError {
    /// Reading commands failed.
    #[error("failed to read input: {0}")]
    Read(#[source] std::io::Error),

    /// Writing directives failed, usually because the actuator went away.
    #[error("failed to write directives: {0}")]
    Write(#[source] std::io::Error),
}
