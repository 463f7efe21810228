//! Infrastructure layer for mimic
//!
//! Adapters that connect the engine to the outside world: configuration
//! file loading (figment, TOML) and the JSONL transcript logger. No network
//! adapters exist — the engine simulates its "model" locally by design.

pub mod config;
pub mod logging;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, FileConfig};
pub use logging::JsonlTranscriptLogger;
