use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The provider serves 20 characters per page; a board never needs more.
pub const MAX_PAIRS: usize = 20;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Character provider settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the character API (e.g., "https://rickandmortyapi.com/api").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Board rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Distinct characters per board; the deck holds twice as many cards.
    #[serde(default = "default_pairs")]
    pub pairs: usize,
    /// How long a mismatched pair stays face up, in milliseconds.
    #[serde(default = "default_mismatch_delay_ms")]
    pub mismatch_delay_ms: u64,
    /// Fixed shuffle seed. Unset means a fresh board every launch.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Cards per board row.
    #[serde(default = "default_columns")]
    pub columns: usize,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }
}

impl GameConfig {
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

fn default_base_url() -> String {
    "https://rickandmortyapi.com/api".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_pairs() -> usize {
    4
}

fn default_mismatch_delay_ms() -> u64 {
    1000
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_columns() -> usize {
    4
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pairs: default_pairs(),
            mismatch_delay_ms: default_mismatch_delay_ms(),
            seed: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            columns: default_columns(),
        }
    }
}
