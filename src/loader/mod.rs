//! Character loading.
//!
//! The provider is opaque to the rest of the game: anything that can hand
//! back a list of [`Character`]s implements [`CharacterSource`].

mod client;
mod error;

use async_trait::async_trait;

use crate::game::Character;

pub use client::RickAndMortyClient;
pub use error::LoadError;

#[async_trait]
pub trait CharacterSource: Send + Sync + 'static {
    /// Fetch the characters for one board, in provider order.
    async fn load_characters(&self) -> Result<Vec<Character>, LoadError>;
}
