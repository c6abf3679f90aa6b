//! Deck construction: duplicate, tag, shuffle.

use super::card::Card;
use super::character::Character;
use super::rng::GameRng;

pub type Deck = Vec<Card>;

/// Build a shuffled deck holding every character exactly twice.
///
/// Each copy becomes its own `Card` with a fresh `CardId` and
/// `matched = false`. An empty character list yields an empty deck.
pub fn build_deck(characters: &[Character], rng: &mut GameRng) -> Deck {
    let mut deck: Deck = characters
        .iter()
        .flat_map(|character| [Card::new(character.clone()), Card::new(character.clone())])
        .collect();
    rng.shuffle(&mut deck);
    deck
}
