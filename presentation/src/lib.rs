//! Presentation layer for mimic
//!
//! This crate contains CLI definitions, console output formatting,
//! progress reporting, and the interactive chat REPL. It consumes the
//! engine exclusively through its handle and snapshot channel.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::Cli;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
