//! Reducer for the match engine.

use crate::game::is_won;
use crate::mvi::Reducer;

use super::intent::GameIntent;
use super::state::{GameState, LoadPhase};

/// Pure state transitions for one board.
///
/// A mismatch leaves the state in Comparing with `disabled` raised. Scheduling
/// the matching `ResolveMismatch` is up to the caller.
///
/// Picking the same slot twice compares a card with itself and counts as a
/// match. Callers must filter picks through [`GameState::is_selectable`].
pub struct MatchReducer;

impl Reducer for MatchReducer {
    type State = GameState;
    type Intent = GameIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GameIntent::Loading { generation } => GameState {
                phase: LoadPhase::Loading,
                generation,
                best: state.best,
                ..GameState::default()
            },

            GameIntent::LoadFailed {
                generation,
                message,
            } => {
                if generation != state.generation {
                    return state;
                }
                GameState {
                    phase: LoadPhase::Failed { message },
                    generation,
                    best: state.best,
                    ..GameState::default()
                }
            }

            GameIntent::NewGame { generation, deck } => GameState {
                phase: LoadPhase::Ready,
                deck,
                generation,
                best: state.best,
                ..GameState::default()
            },

            GameIntent::Select { slot } => {
                if state.disabled
                    || state.won
                    || !state.phase.is_ready()
                    || slot >= state.deck.len()
                {
                    return state;
                }
                match state.choice_one {
                    None => GameState {
                        choice_one: Some(slot),
                        ..state
                    },
                    Some(first) => compare(state, first, slot),
                }
            }

            GameIntent::ResolveMismatch { generation } => {
                if generation != state.generation || !state.awaiting_reset() {
                    return state;
                }
                finish_turn(state)
            }
        }
    }
}

fn compare(mut state: GameState, first: usize, second: usize) -> GameState {
    state.choice_two = Some(second);
    state.disabled = true;

    let pair_id = state.deck[first].pair_id();
    if state.deck[second].pair_id() != pair_id {
        return state;
    }

    for card in state.deck.iter_mut().filter(|card| card.pair_id() == pair_id) {
        card.matched = true;
    }
    finish_turn(state)
}

fn finish_turn(mut state: GameState) -> GameState {
    state.choice_one = None;
    state.choice_two = None;
    state.turns += 1;
    state.disabled = false;

    let won = is_won(&state.deck);
    if won && !state.won {
        state.best = Some(state.best.map_or(state.turns, |best| best.min(state.turns)));
    }
    state.won = won;
    state
}
