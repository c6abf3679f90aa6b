//! Game core: characters, cards, deck construction, match engine and win check.

mod card;
mod character;
mod deck;
pub mod engine;
mod rng;
mod win;

pub use card::{Card, CardId};
pub use character::Character;
pub use deck::{build_deck, Deck};
pub use engine::{GameIntent, GameState, LoadPhase, MatchReducer};
pub use rng::GameRng;
pub use win::is_won;
