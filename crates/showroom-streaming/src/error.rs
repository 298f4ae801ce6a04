//! Streaming errors.

/// Error type for streaming operations.
#[derive(Debug, thiserror::Error)]
pub enum StreamError {
    #[error("Shell not sent before sections")]
    ShellNotSent,

    #[error("Shell already sent")]
    ShellAlreadySent,

    #[error("Response already completed")]
    Completed,

    #[error("Sink error: {0}")]
    Sink(String),
}
