//! Protocol error types.

use thiserror::Error;

/// Result alias for protocol parsing.
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Errors raised while parsing an input line.
///
/// None of these are fatal to the engine: the runtime logs them together
/// with the offending line and moves on to the next one.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The first word of the line is not a known command.
    #[error("unrecognized command {command:?}")]
    UnknownCommand {
        /// The command word as received.
        command: String,
    },

    /// A known command with missing, extra or unparsable arguments.
    #[error("invalid arguments for {command}: {reason}")]
    InvalidArgs {
        /// Command name.
        command: &'static str,
        /// What was wrong with the arguments.
        reason: String,
    },

    /// The ownership payload is not a well-formed array of user records.
    #[error("malformed ownership payload: {0}")]
    Ownership(#[from] serde_json::Error),

    /// A color string that is not of the form `(r, g, b)`.
    #[error("invalid color {input:?}, expected \"(r, g, b)\" with components 0-255")]
    InvalidColor {
        /// The rejected input.
        input: String,
    },
}
