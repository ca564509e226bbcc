//! Error types for the control protocol bridge.

use thiserror::Error;

/// Errors surfaced by the bridge.
///
/// The display strings of [`MalformedCall`](ProtocolError::MalformedCall)
/// and [`UnknownEventId`](ProtocolError::UnknownEventId) are the exact texts
/// sent on the wire as error replies and must not change.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// An inbound call had the wrong argument count or types
    #[error("Malformed method call.")]
    MalformedCall,

    /// Stop/Pause referenced an id with no active request behind it
    #[error("No event with given id found.")]
    UnknownEventId,

    /// Invalid bridge configuration
    #[error("invalid bridge configuration: {0}")]
    Configuration(String),
}

/// Convenience alias for bridge results.
pub type ProtocolResult<T> = std::result::Result<T, ProtocolError>;
