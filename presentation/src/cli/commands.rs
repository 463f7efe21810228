//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for mimic-chat
#[derive(Parser, Debug)]
#[command(name = "mimic-chat")]
#[command(author, version, about = "Simulated streaming assistant for exercising chat interfaces")]
#[command(long_about = r#"
Mimic mimics a token-streaming assistant without any model behind it:
pseudo-text is produced in small timed chunks and appended to a growing
reply, exactly the way a real streaming backend would feed a chat UI.

Give a prompt for a one-shot reply, or start the interactive chat REPL.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./mimic.toml        Project-level config
3. ~/.config/mimic-chat/config.toml   Global config

Example:
  mimic-chat "Explain how the borrow checker works"
  mimic-chat --chat --seed 42
  mimic-chat --generate --words 250 --live
"#)]
pub struct Cli {
    /// Prompt to send (one-shot mode; not required with --chat or --generate)
    pub prompt: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Reply instantly (no streaming session, whole reply at once)
    #[arg(long)]
    pub instant: bool,

    /// Start a bare generation with no user message
    #[arg(short, long)]
    pub generate: bool,

    /// Pin the reply word target instead of drawing from the configured range
    #[arg(short, long, value_name = "N")]
    pub words: Option<usize>,

    /// Seed the random source (reproducible conversations)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Producer tick interval override, in milliseconds
    #[arg(long, value_name = "MS")]
    pub tick_ms: Option<u64>,

    /// Per-tick word budget override
    #[arg(long, value_name = "N")]
    pub chunk_words: Option<usize>,

    /// Pre-seed the transcript with sample exchanges
    #[arg(long, value_name = "N")]
    pub seed_history: Option<usize>,

    /// Write transcript events to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub transcript: Option<PathBuf>,

    /// Print streamed text as it flushes instead of a progress bar
    #[arg(long)]
    pub live: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the banner and progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,
}
