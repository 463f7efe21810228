//! Application layer for mimic
//!
//! This crate contains the streaming session engine (controller + engine
//! task), pacing configuration, and port definitions. It depends only on
//! the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{ParamsError, StreamParams};
pub use ports::transcript_logger::{NoTranscriptLogger, TranscriptEvent, TranscriptLogger};
pub use use_cases::chat_controller::{ChatController, ChatSnapshot};
pub use use_cases::chat_service::{ChatCommand, ChatService, ChatServiceError};
