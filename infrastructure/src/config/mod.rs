//! Configuration file loading for mimic
//!
//! This module handles file I/O and merging of configuration from multiple
//! sources. The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./mimic.toml` or `./.mimic.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/mimic-chat/config.toml`
//! 4. Fallback: `~/.config/mimic-chat/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigError, FileConfig, FileLogConfig, FileReplConfig, FileStreamConfig};
pub use loader::ConfigLoader;
