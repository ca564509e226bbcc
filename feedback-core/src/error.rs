//! Error types for engine operations.

use thiserror::Error;

/// Errors a feedback engine may report from lifecycle operations.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine refused the request (unknown event, resource limits, ...)
    #[error("request rejected: {0}")]
    Rejected(String),

    /// A sink needed by the request is not available
    #[error("sink unavailable: {0}")]
    SinkUnavailable(String),

    /// Internal engine failure
    #[error("engine error: {0}")]
    Internal(String),
}

/// Convenience alias for engine operation results.
pub type EngineResult<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = EngineError::Rejected("no such event".to_string());
        assert_eq!(error.to_string(), "request rejected: no such event");

        let error = EngineError::SinkUnavailable("gst".to_string());
        assert_eq!(error.to_string(), "sink unavailable: gst");

        let error = EngineError::Internal("worker died".to_string());
        assert_eq!(error.to_string(), "engine error: worker died");
    }
}
