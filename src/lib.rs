//! Memory-matching card game over Rick and Morty characters.
//!
//! ```text
//! loader ──→ game::build_deck ──→ session (MatchReducer, timers) ──→ ui
//! ```

pub mod args;
pub mod config;
pub mod game;
pub mod loader;
pub mod logging;
pub mod mvi;
pub mod session;
pub mod ui;
