//! Shared test utilities.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use async_trait::async_trait;
use parking_lot::Mutex;
use portal_pairs::config::GameConfig;
use portal_pairs::game::{Character, GameState};
use portal_pairs::loader::{CharacterSource, LoadError};
use portal_pairs::session::{GameSession, SessionEvent};
use std::collections::{BTreeMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Characters `A`, `B`, `C`, `D` with ids 1..=4.
pub fn roster() -> Vec<Character> {
    ["A", "B", "C", "D"]
        .iter()
        .enumerate()
        .map(|(i, name)| Character::new(i as u64 + 1, *name, format!("{name}.jpeg")))
        .collect()
}

/// Scripted load result for [`StubSource`].
pub enum Outcome {
    Characters(Vec<Character>),
    HttpStatus(u16),
}

/// In-process character source. Plays scripted outcomes in order, then
/// keeps returning [`roster`].
pub struct StubSource {
    script: Mutex<VecDeque<Outcome>>,
    calls: AtomicUsize,
}

impl StubSource {
    pub fn new() -> Arc<Self> {
        Self::scripted(Vec::new())
    }

    pub fn scripted(outcomes: Vec<Outcome>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(outcomes.into()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CharacterSource for StubSource {
    async fn load_characters(&self) -> Result<Vec<Character>, LoadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script.lock().pop_front() {
            Some(Outcome::Characters(characters)) => Ok(characters),
            Some(Outcome::HttpStatus(status)) => Err(LoadError::Status { status }),
            None => Ok(roster()),
        }
    }
}

pub fn game_config() -> GameConfig {
    GameConfig {
        seed: Some(42),
        ..GameConfig::default()
    }
}

pub fn new_session(
    source: Arc<StubSource>,
) -> (GameSession, mpsc::UnboundedReceiver<SessionEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (GameSession::new(source, &game_config(), tx), rx)
}

/// Start a game and feed the load result back in.
pub async fn dealt_session(
    source: Arc<StubSource>,
) -> (GameSession, mpsc::UnboundedReceiver<SessionEvent>) {
    let (mut session, mut rx) = new_session(source);
    session.start_new_game();
    let event = rx.recv().await.expect("load event");
    session.handle_event(event);
    (session, rx)
}

/// Slot pairs grouped by character id, ordered by id.
pub fn pair_slots(state: &GameState) -> Vec<(usize, usize)> {
    let mut by_id: BTreeMap<u64, Vec<usize>> = BTreeMap::new();
    for (slot, card) in state.deck.iter().enumerate() {
        by_id.entry(card.pair_id()).or_default().push(slot);
    }
    by_id.values().map(|slots| (slots[0], slots[1])).collect()
}

/// Two slots holding different characters.
pub fn mismatched_slots(state: &GameState) -> (usize, usize) {
    let pairs = pair_slots(state);
    (pairs[0].0, pairs[1].0)
}
