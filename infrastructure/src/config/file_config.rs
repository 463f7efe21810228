//! Config file schema.
//!
//! [`FileConfig`] mirrors the engine's pacing knobs in plain integer fields
//! (milliseconds, word counts) so the TOML reads naturally, and converts to
//! validated [`StreamParams`] at the edge.

use mimic_application::{ParamsError, StreamParams};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors produced while loading or converting configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid stream parameters: {0}")]
    InvalidParams(#[from] ParamsError),

    #[error("could not render config: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("could not load config: {0}")]
    Load(#[from] Box<figment::Error>),
}

/// Root of the config file (`mimic.toml`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub stream: FileStreamConfig,
    pub log: FileLogConfig,
    pub repl: FileReplConfig,
}

/// `[stream]` — engine pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStreamConfig {
    /// Producer tick period in milliseconds.
    pub tick_ms: u64,
    /// Render-frame period in milliseconds.
    pub frame_ms: u64,
    /// Word budget per producer tick.
    pub chunk_words: usize,
    pub stream_words_min: usize,
    pub stream_words_max: usize,
    pub instant_words_min: usize,
    pub instant_words_max: usize,
}

impl Default for FileStreamConfig {
    fn default() -> Self {
        // Single source of truth for defaults is StreamParams.
        let params = StreamParams::default();
        Self {
            tick_ms: params.tick_interval.as_millis() as u64,
            frame_ms: params.frame_interval.as_millis() as u64,
            chunk_words: params.chunk_words,
            stream_words_min: params.stream_words_min,
            stream_words_max: params.stream_words_max,
            instant_words_min: params.instant_words_min,
            instant_words_max: params.instant_words_max,
        }
    }
}

/// `[log]` — structured transcript logging.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Write one JSONL record per transcript event to this path.
    pub transcript_path: Option<PathBuf>,
}

/// `[repl]` — chat REPL behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Print raw deltas as they flush instead of a progress bar.
    pub live_output: bool,
    /// Pre-seed the transcript with this many sample exchanges.
    pub seed_history: usize,
}

impl FileConfig {
    /// Convert the `[stream]` section into validated engine parameters.
    pub fn stream_params(&self) -> Result<StreamParams, ConfigError> {
        let params = StreamParams::default()
            .with_tick_interval(Duration::from_millis(self.stream.tick_ms))
            .with_frame_interval(Duration::from_millis(self.stream.frame_ms))
            .with_chunk_words(self.stream.chunk_words)
            .with_stream_words(self.stream.stream_words_min, self.stream.stream_words_max)
            .with_instant_words(self.stream.instant_words_min, self.stream.instant_words_max);
        params.validate()?;
        Ok(params)
    }

    /// Render the effective configuration as TOML (`--show-config`).
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
