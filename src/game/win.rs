use super::card::Card;

/// True when the deck has cards and every one of them is matched.
///
/// An empty deck (nothing loaded yet) never counts as won.
pub fn is_won(deck: &[Card]) -> bool {
    !deck.is_empty() && deck.iter().all(|card| card.matched)
}
