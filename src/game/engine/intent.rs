//! Intents for the match engine.

use crate::game::Deck;
use crate::mvi::Intent;

/// Events fed into [`MatchReducer`](super::MatchReducer).
///
/// Intents produced by asynchronous work carry the generation of the game
/// that started it; the reducer drops them once a newer game has begun.
#[derive(Debug)]
pub enum GameIntent {
    /// A new game was requested but characters are still being fetched.
    Loading { generation: u64 },

    /// Characters could not be loaded.
    LoadFailed { generation: u64, message: String },

    /// Start a fresh game on the given deck.
    NewGame { generation: u64, deck: Deck },

    /// The player picked the card in `slot`.
    Select { slot: usize },

    /// The mismatch delay elapsed; flip both cards back and end the turn.
    ResolveMismatch { generation: u64 },
}

impl Intent for GameIntent {}
