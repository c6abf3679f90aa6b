//! Match engine.
//!
//! Selection/comparison/turn state machine for one board:
//!
//! ```text
//! Idle ──Select──→ OneSelected ──Select──→ Comparing
//!   ↑                                        │ same pair: reset immediately
//!   └──────────── Reset (turns += 1) ←───────┘ different: ResolveMismatch after delay
//! ```
//!
//! - `state.rs` - board snapshot (`GameState`)
//! - `intent.rs` - user picks, new games, loader and timer results
//! - `reducer.rs` - transitions (pure; timers are owned by the session)

mod intent;
mod reducer;
mod state;

pub use intent::GameIntent;
pub use reducer::MatchReducer;
pub use state::{GameState, LoadPhase};
