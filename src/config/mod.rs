//! Configuration file handling.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config, GameConfig, UiConfig, MAX_PAIRS};
