//! CLI entrypoint for mimic-chat
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use mimic_application::{ChatController, ChatService};
use mimic_infrastructure::{ConfigLoader, JsonlTranscriptLogger};
use mimic_presentation::{ChatRepl, Cli};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting mimic-chat");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    // CLI flags override the file config
    if let Some(path) = &cli.transcript {
        config.log.transcript_path = Some(path.clone());
    }
    if cli.live {
        config.repl.live_output = true;
    }
    if let Some(count) = cli.seed_history {
        config.repl.seed_history = count;
    }

    let mut params = config.stream_params()?;
    if let Some(ms) = cli.tick_ms {
        params = params.with_tick_interval(Duration::from_millis(ms));
    }
    if let Some(words) = cli.chunk_words {
        params = params.with_chunk_words(words);
    }
    if let Some(words) = cli.words {
        params = params.with_fixed_target(words);
    }
    params.validate()?;

    if cli.show_config {
        println!("{}", config.to_toml_string()?);
        return Ok(());
    }

    // === Dependency Injection ===
    let mut controller = match cli.seed {
        Some(seed) => ChatController::with_rng(params, StdRng::seed_from_u64(seed)),
        None => ChatController::new(params),
    };

    if let Some(logger) = config
        .log
        .transcript_path
        .as_ref()
        .and_then(JsonlTranscriptLogger::new)
    {
        info!("Writing transcript events to {}", logger.path().display());
        controller = controller.with_logger(Arc::new(logger));
    }

    let service = ChatService::spawn_with(controller);

    if config.repl.seed_history > 0 {
        service.seed_history(config.repl.seed_history)?;
    }

    let repl = ChatRepl::new(service)
        .with_live_output(config.repl.live_output)
        .with_instant_replies(cli.instant)
        .with_quiet(cli.quiet)
        .with_config_summary(config.to_toml_string()?);

    // Chat mode
    if cli.chat {
        repl.run().await?;
        return Ok(());
    }

    // Bare generation mode — stream one reply with no user message
    if cli.generate {
        repl.generate_once().await;
        return Ok(());
    }

    // One-shot mode — prompt is required
    let prompt = match cli.prompt {
        Some(p) => p,
        None => bail!(
            "A prompt is required. Use --chat for interactive mode or --generate for a bare stream."
        ),
    };
    repl.run_once(&prompt, cli.instant).await;

    Ok(())
}
