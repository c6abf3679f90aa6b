//! Board snapshot.

use crate::game::Deck;
use crate::mvi::UiState;

/// Where the character data for the current game stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Loading,
    Failed {
        message: String,
    },
    Ready,
}

impl LoadPhase {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// Everything the view needs to draw one frame of the game.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameState {
    pub phase: LoadPhase,
    pub deck: Deck,
    /// Slot of the first face-up pick of the current turn.
    pub choice_one: Option<usize>,
    /// Slot of the second pick; only set while a comparison is pending.
    pub choice_two: Option<usize>,
    /// Input gate, raised while two picks are under comparison.
    pub disabled: bool,
    /// Completed comparisons in this game.
    pub turns: u32,
    /// Lowest `turns` of any won game since launch.
    pub best: Option<u32>,
    pub won: bool,
    /// Incremented by the session for every new game.
    pub generation: u64,
}

impl UiState for GameState {}

impl GameState {
    /// Whether the card in `slot` should be drawn face up.
    pub fn is_face_up(&self, slot: usize) -> bool {
        self.choice_one == Some(slot)
            || self.choice_two == Some(slot)
            || self.deck.get(slot).is_some_and(|card| card.matched)
    }

    /// Whether picking `slot` now would be a legal move.
    ///
    /// The reducer itself accepts any in-range slot; callers filter with this
    /// so a face-up card is never picked twice.
    pub fn is_selectable(&self, slot: usize) -> bool {
        self.phase.is_ready()
            && !self.disabled
            && !self.won
            && self.choice_one != Some(slot)
            && self.deck.get(slot).is_some_and(|card| !card.matched)
    }

    /// Two unmatched picks are face up and waiting for the mismatch delay.
    pub fn awaiting_reset(&self) -> bool {
        self.disabled && self.choice_one.is_some() && self.choice_two.is_some()
    }

    pub fn total_pairs(&self) -> usize {
        self.deck.len() / 2
    }

    pub fn matched_pairs(&self) -> usize {
        self.deck.iter().filter(|card| card.matched).count() / 2
    }
}
