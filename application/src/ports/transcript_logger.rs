//! Port for structured transcript logging.
//!
//! Defines the [`TranscriptLogger`] trait for recording chat engine events
//! (messages appended, sessions started and finished, history cleared) to a
//! structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing carries
//! human-readable diagnostics, while this port captures what happened to the
//! transcript in a machine-readable format (JSONL in the default adapter).

use serde_json::Value;

/// A structured transcript event for logging.
pub struct TranscriptEvent {
    /// Event type identifier (e.g. "message_appended", "stream_finished").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl TranscriptEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging transcript events to a structured log.
///
/// Implementations write each event as a single record (e.g. one JSONL
/// line). `log` is intentionally synchronous and non-fallible: the engine
/// must keep streaming even when the log target misbehaves, so failures are
/// swallowed by the adapter.
pub trait TranscriptLogger: Send + Sync {
    /// Record a transcript event.
    fn log(&self, event: TranscriptEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoTranscriptLogger;

impl TranscriptLogger for NoTranscriptLogger {
    fn log(&self, _event: TranscriptEvent) {}
}
