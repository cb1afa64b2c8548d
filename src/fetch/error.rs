//! Programming errors raised by the fetch state machine.

use thiserror::Error;

/// Misuse of the event surface.
///
/// These are never folded into the `Failure` phase; a caller that receives
/// one has a bug and must propagate it.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProgrammingError {
    #[error("Unrecognized fetch event kind '{kind}'")]
    UnknownEvent { kind: String },

    #[error("Fetch event has no 'type' field")]
    MissingKind,

    #[error("Malformed '{kind}' event: {message}")]
    MalformedEvent { kind: String, message: String },
}
