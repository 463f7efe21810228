//! Chat message entities.
//!
//! A [`ChatMessage`] is one entry in the transcript: a user prompt or an
//! assistant reply. Assistant replies may be created in *streaming* state
//! (empty content, `is_streaming = true`) and are then grown by the session
//! engine until finalized.

use crate::core::words::count_words;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(Uuid);

impl MessageId {
    /// Generate a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The author of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// Message typed by the user.
    User,
    /// Reply produced by the simulated assistant.
    Assistant,
}

impl MessageRole {
    /// Short label for display and structured logs.
    pub fn label(&self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

impl std::fmt::Display for MessageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single message in the transcript.
///
/// Lifecycle: user messages are immutable after creation. Assistant
/// messages either arrive complete ([`ChatMessage::assistant`]) or start
/// streaming ([`ChatMessage::assistant_streaming`]) and receive content
/// appends until they are finalized exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique, stable identity — streaming updates locate the message by id,
    /// never by position.
    pub id: MessageId,
    /// Who authored the message.
    pub role: MessageRole,
    /// Message body (markdown-flavored plain text).
    pub content: String,
    /// True while the session engine is still appending to this message.
    pub is_streaming: bool,
    /// Creation timestamp (UTC).
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(role: MessageRole, content: String, is_streaming: bool) -> Self {
        Self {
            id: MessageId::new(),
            role,
            content,
            is_streaming,
            created_at: Utc::now(),
        }
    }

    /// A user message. The text is trimmed; blank input is the caller's
    /// problem to reject (the facade silently drops it).
    pub fn user(text: &str) -> Self {
        Self::new(MessageRole::User, text.trim().to_string(), false)
    }

    /// A complete, non-streaming assistant reply.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content.into(), false)
    }

    /// An empty assistant reply in streaming state.
    pub fn assistant_streaming() -> Self {
        Self::new(MessageRole::Assistant, String::new(), true)
    }

    /// Whitespace-token word count of the current content.
    pub fn word_count(&self) -> usize {
        count_words(&self.content)
    }
}
