//! Console output formatter for chat messages

use colored::Colorize;
use mimic_application::ChatSnapshot;
use mimic_domain::{ChatMessage, MessageRole, StreamOutcome};

/// Formats messages and session summaries for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a single message: colored role header, dim metadata, body.
    pub fn format_message(message: &ChatMessage) -> String {
        let header = match message.role {
            MessageRole::User => "you".cyan().bold(),
            MessageRole::Assistant => "assistant".green().bold(),
        };
        let meta = format!(
            "({} words, {})",
            message.word_count(),
            message.created_at.format("%H:%M:%S")
        )
        .dimmed();

        format!("{} {}\n{}\n", header, meta, message.content.trim_end())
    }

    /// One-line summary of how the last session ended.
    pub fn outcome_line(snapshot: &ChatSnapshot) -> String {
        match snapshot.last_outcome {
            Some(StreamOutcome::Completed) => format!(
                "— completed: {}/{} words",
                snapshot.generated_words, snapshot.target_words
            )
            .dimmed()
            .to_string(),
            Some(StreamOutcome::Stopped) => format!(
                "— stopped at {}/{} words",
                snapshot.generated_words, snapshot.target_words
            )
            .yellow()
            .dimmed()
            .to_string(),
            None => String::new(),
        }
    }
}
