use uuid::Uuid;

use super::character::Character;

/// Identity of a single card instance.
///
/// Both duplicates of a character share `Character::id` but never a `CardId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardId(Uuid);

impl CardId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CardId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub character: Character,
    pub matched: bool,
}

impl Card {
    pub fn new(character: Character) -> Self {
        Self {
            id: CardId::new(),
            character,
            matched: false,
        }
    }

    /// Provider id shared by the two duplicates of a pair.
    pub fn pair_id(&self) -> u64 {
        self.character.id
    }
}
