//! The transcript — ordered, append-mostly message log.
//!
//! Insertion order is chronological order. The only in-place mutations are
//! content appends to the single streaming message and its one-time
//! finalization; everything else is append or full clear.
//!
//! The at-most-one-streaming invariant is enforced here, at the data layer:
//! [`Transcript::begin_streaming`] refuses to open a second streaming
//! message, so a controller bug cannot corrupt the log.

use crate::core::error::DomainError;
use crate::message::{ChatMessage, MessageId};

/// Ordered collection of chat messages.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a complete (non-streaming) message. Returns its id.
    pub fn push(&mut self, message: ChatMessage) -> MessageId {
        debug_assert!(
            !message.is_streaming,
            "complete messages go through push, streaming ones through begin_streaming"
        );
        let id = message.id;
        self.messages.push(message);
        id
    }

    /// Open a new streaming assistant message with empty content.
    ///
    /// Errors with [`DomainError::AlreadyStreaming`] if a streaming message
    /// is already present — callers must finalize the old session first.
    pub fn begin_streaming(&mut self) -> Result<MessageId, DomainError> {
        if self.streaming_message().is_some() {
            return Err(DomainError::AlreadyStreaming);
        }
        let message = ChatMessage::assistant_streaming();
        let id = message.id;
        self.messages.push(message);
        Ok(id)
    }

    /// Append `text` to the streaming message identified by `id`.
    ///
    /// Exact concatenation: no separator is inserted, the chunk text carries
    /// its own spacing and newlines.
    pub fn append_content(&mut self, id: MessageId, text: &str) -> Result<(), DomainError> {
        let message = self
            .messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(DomainError::NoSuchMessage(id))?;
        if !message.is_streaming {
            return Err(DomainError::NotStreaming(id));
        }
        message.content.push_str(text);
        Ok(())
    }

    /// Flip `is_streaming` off for the message identified by `id`.
    ///
    /// Returns `Ok(true)` when the flag was flipped, `Ok(false)` when the
    /// message was already final (idempotent no-op).
    pub fn finalize(&mut self, id: MessageId) -> Result<bool, DomainError> {
        let message = self
            .messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(DomainError::NoSuchMessage(id))?;
        if !message.is_streaming {
            return Ok(false);
        }
        message.is_streaming = false;
        Ok(true)
    }

    /// The currently streaming message, if any.
    pub fn streaming_message(&self) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| m.is_streaming)
    }

    /// Look up a message by id.
    pub fn get(&self, id: MessageId) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| m.id == id)
    }

    /// All messages, in chronological order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Drop every message. The only bulk deletion the transcript supports.
    pub fn clear(&mut self) {
        self.messages.clear();
    }
}
