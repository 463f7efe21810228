//! REPL (Read-Eval-Print Loop) for interactive chat
//!
//! Plain input sends a message and follows the reply; slash commands drive
//! the rest of the engine surface. While a stream is running the REPL
//! follows the snapshot channel — Ctrl-C stops generation without leaving
//! the session, and whatever was already produced stays in the transcript.

use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ProgressReporter;
use indicatif::ProgressBar;
use mimic_application::{ChatService, ChatSnapshot};
use mimic_domain::MessageRole;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::io::Write;

/// Interactive chat REPL
pub struct ChatRepl {
    service: ChatService,
    /// Print raw deltas as they flush instead of a progress bar.
    live_output: bool,
    /// Reply instantly instead of streaming.
    instant_replies: bool,
    /// Suppress banner and progress chrome.
    quiet: bool,
    /// Effective configuration, rendered for `/config`.
    config_summary: Option<String>,
}

impl ChatRepl {
    /// Create a new ChatRepl around a running engine.
    pub fn new(service: ChatService) -> Self {
        Self {
            service,
            live_output: false,
            instant_replies: false,
            quiet: false,
            config_summary: None,
        }
    }

    /// Print streamed text as it flushes instead of a progress bar.
    pub fn with_live_output(mut self, live: bool) -> Self {
        self.live_output = live;
        self
    }

    /// Answer with instant replies instead of streaming sessions.
    pub fn with_instant_replies(mut self, instant: bool) -> Self {
        self.instant_replies = instant;
        self
    }

    /// Suppress the banner and progress indicators.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Attach a rendered config for the `/config` command.
    pub fn with_config_summary(mut self, summary: impl Into<String>) -> Self {
        self.config_summary = Some(summary.into());
        self
    }

    /// Run the interactive REPL
    pub async fn run(&self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("mimic-chat").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        if !self.quiet {
            self.print_welcome();
        }

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if line.starts_with('/') {
                        if self.handle_command(line).await {
                            break;
                        }
                        continue;
                    }

                    self.run_once(line, self.instant_replies).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Send one prompt, follow the reply to the end, and print it.
    pub async fn run_once(&self, prompt: &str, instant: bool) {
        // Blank input would be rejected inside the engine with no transcript
        // change; don't sit waiting for a reply that will never come.
        if prompt.trim().is_empty() {
            return;
        }

        let baseline = self.service.snapshot().messages.len();

        let sent = if instant {
            self.service.send_message_instant(prompt)
        } else {
            self.service.send_message(prompt)
        };
        if sent.is_err() {
            eprintln!("chat engine is not running");
            return;
        }

        let (snapshot, printed) = self.await_reply(baseline + 2).await;
        self.print_reply(&snapshot, printed, !instant);
    }

    /// Start a bare generation (no user message) and follow it.
    pub async fn generate_once(&self) {
        let baseline = self.service.snapshot().messages.len();
        if self.service.start_generation().is_err() {
            eprintln!("chat engine is not running");
            return;
        }
        let (snapshot, printed) = self.await_reply(baseline + 1).await;
        self.print_reply(&snapshot, printed, true);
    }

    /// Handle a slash command. Returns true when the REPL should exit.
    async fn handle_command(&self, line: &str) -> bool {
        let mut parts = line.splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or("");
        let rest = parts.next().unwrap_or("").trim();

        match command {
            "/quit" | "/exit" | "/q" => {
                println!("Bye!");
                return true;
            }
            "/help" | "/h" => self.print_help(),
            "/generate" | "/g" => self.generate_once().await,
            "/instant" | "/i" => {
                if rest.is_empty() {
                    println!("usage: /instant <text>");
                } else {
                    self.run_once(rest, true).await;
                }
            }
            "/stop" => {
                // Streams are followed to completion at this prompt, so this
                // is normally the idempotent no-op; it exists for parity with
                // Ctrl-C and for scripted stdin sessions.
                if self.service.stop_generation().await.is_ok() {
                    println!("stopped");
                }
            }
            "/clear" => {
                if self.service.clear_history().await.is_ok() {
                    println!("history cleared");
                }
            }
            "/follow" => match parse_toggle(rest) {
                Some(enabled) => {
                    let _ = self.service.set_auto_scroll(enabled);
                    println!("auto-scroll {}", if enabled { "on" } else { "off" });
                }
                None => println!("usage: /follow on|off"),
            },
            "/history" => self.print_history(),
            "/config" => match &self.config_summary {
                Some(summary) => println!("{summary}"),
                None => println!("running on built-in defaults"),
            },
            _ => println!("unknown command: {command} (try /help)"),
        }

        false
    }

    /// Follow the snapshot channel until the expected reply is finalized.
    ///
    /// Returns the final snapshot and, in live mode, how many bytes of the
    /// streaming message were already printed.
    async fn await_reply(&self, expected_len: usize) -> (ChatSnapshot, usize) {
        let mut rx = self.service.subscribe();
        let mut bar: Option<ProgressBar> = None;
        let mut printed = 0usize;
        let mut stop_requested = false;

        loop {
            let snapshot = rx.borrow_and_update().clone();
            self.render_streaming(&snapshot, &mut bar, &mut printed);

            if snapshot.messages.len() >= expected_len
                && !snapshot.generating
                && snapshot.streaming_message().is_none()
            {
                if let Some(bar) = bar.take() {
                    ProgressReporter::finish(&bar);
                }
                return (snapshot, printed);
            }

            tokio::select! {
                changed = rx.changed() => {
                    if changed.is_err() {
                        return (snapshot, printed);
                    }
                }
                _ = tokio::signal::ctrl_c(), if !stop_requested => {
                    stop_requested = true;
                    let _ = self.service.stop_generation().await;
                }
            }
        }
    }

    /// Render one observed snapshot while a reply is in flight.
    fn render_streaming(
        &self,
        snapshot: &ChatSnapshot,
        bar: &mut Option<ProgressBar>,
        printed: &mut usize,
    ) {
        if self.live_output {
            if let Some(message) = snapshot.streaming_message() {
                let content = &message.content;
                if content.len() > *printed {
                    print!("{}", &content[*printed..]);
                    let _ = std::io::stdout().flush();
                    *printed = content.len();
                }
            }
        } else if !self.quiet && snapshot.generating {
            let bar =
                bar.get_or_insert_with(|| ProgressReporter::stream_bar(snapshot.target_words));
            ProgressReporter::update(bar, snapshot.generated_words, snapshot.target_words);
        }
    }

    /// Print the finished reply (and session summary for streamed ones).
    fn print_reply(&self, snapshot: &ChatSnapshot, printed: usize, show_outcome: bool) {
        let Some(message) = snapshot
            .messages
            .iter()
            .rev()
            .find(|m| m.role == MessageRole::Assistant)
        else {
            return;
        };

        if self.live_output {
            // Deltas already went out; emit the unflushed tail and close the line.
            if message.content.len() > printed {
                print!("{}", &message.content[printed..]);
            }
            println!();
        } else {
            println!("{}", ConsoleFormatter::format_message(message));
        }

        if show_outcome && !self.quiet {
            let outcome = ConsoleFormatter::outcome_line(snapshot);
            if !outcome.is_empty() {
                println!("{outcome}");
            }
        }
    }

    fn print_history(&self) {
        let snapshot = self.service.snapshot();
        if snapshot.messages.is_empty() {
            println!("history is empty");
            return;
        }
        for message in &snapshot.messages {
            println!("{}", ConsoleFormatter::format_message(message));
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│             Mimic - Chat Mode               │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Streaming simulated replies — no model attached.");
        println!("Type a message, or: /generate /instant <text> /history /clear /follow on|off /config /help /quit");
        println!("Ctrl-C while streaming stops the generation.");
        println!();
    }

    fn print_help(&self) {
        println!("Commands:");
        println!("  /generate          start a generation with no user message");
        println!("  /instant <text>    send <text> and reply instantly (no streaming)");
        println!("  /stop              stop the active generation (no-op when idle)");
        println!("  /history           print the transcript");
        println!("  /clear             stop any stream and clear the transcript");
        println!("  /follow on|off     toggle the auto-scroll preference");
        println!("  /config            print the effective configuration");
        println!("  /quit              exit");
        println!();
        println!("Anything else is sent as a message. Ctrl-C stops a running stream.");
    }
}

/// Parse an on/off argument.
fn parse_toggle(value: &str) -> Option<bool> {
    match value {
        "on" | "true" | "1" => Some(true),
        "off" | "false" | "0" => Some(false),
        _ => None,
    }
}
