//! Command-line arguments.
//!
//! Every flag overrides the matching config file value.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

#[derive(Debug, Clone, Parser)]
#[command(name = "portal-pairs", version, about = "Memory card game with Rick and Morty characters")]
pub struct Cli {
    /// Config file path (default: platform config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of character pairs on the board
    #[arg(long, value_name = "N")]
    pub pairs: Option<usize>,

    /// Milliseconds a mismatched pair stays face up
    #[arg(long = "delay-ms", value_name = "MS")]
    pub delay_ms: Option<u64>,

    /// Character API base URL
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Shuffle seed for a reproducible board
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Log file path (default: platform cache dir)
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Load the config file this invocation points at, apply overrides,
    /// then validate the merged result.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let config = Config::load_from(&path)?;
        self.apply_overrides(config)
    }

    pub fn apply_overrides(&self, mut config: Config) -> Result<Config, ConfigError> {
        if let Some(pairs) = self.pairs {
            config.game.pairs = pairs;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.game.mismatch_delay_ms = delay_ms;
        }
        if let Some(url) = &self.api_url {
            config.api.base_url = url.clone();
        }
        if let Some(seed) = self.seed {
            config.game.seed = Some(seed);
        }
        config.validate()?;
        Ok(config)
    }
}
