//! Domain error types

use crate::message::MessageId;
use thiserror::Error;

/// Domain-level errors
///
/// The taxonomy is deliberately narrow: the engine has no I/O and no
/// external dependencies, so the only errors are transcript-seam misuses.
/// Callers treat them as stream-end conditions, never as fatal failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("message not found: {0}")]
    NoSuchMessage(MessageId),

    #[error("message is not streaming: {0}")]
    NotStreaming(MessageId),

    #[error("a streaming message is already active")]
    AlreadyStreaming,
}

impl DomainError {
    /// Check whether this error means the referenced message is gone.
    pub fn is_no_such_message(&self) -> bool {
        matches!(self, DomainError::NoSuchMessage(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_streaming_display() {
        let error = DomainError::AlreadyStreaming;
        assert_eq!(error.to_string(), "a streaming message is already active");
    }

    #[test]
    fn test_is_no_such_message() {
        let id = MessageId::new();
        assert!(DomainError::NoSuchMessage(id).is_no_such_message());
        assert!(!DomainError::NotStreaming(id).is_no_such_message());
        assert!(!DomainError::AlreadyStreaming.is_no_such_message());
    }
}
