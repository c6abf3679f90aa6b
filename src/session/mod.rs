//! Game session: the single owner of the board state.
//!
//! The session feeds intents into [`MatchReducer`], publishes every new
//! snapshot on a `watch` channel and runs the side effects the reducer only
//! describes: fetching characters and the mismatch flip-back timer. Both run
//! as [`SessionTask`]s that report back through [`SessionEvent`]s, tagged
//! with the generation of the game that started them.

mod task;

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};

use crate::config::GameConfig;
use crate::game::{build_deck, Character, GameIntent, GameRng, GameState, LoadPhase, MatchReducer};
use crate::loader::{CharacterSource, LoadError};
use crate::mvi::Reducer;

pub use task::SessionTask;

/// Results of background work, delivered back to [`GameSession::handle_event`].
#[derive(Debug)]
pub enum SessionEvent {
    CharactersLoaded {
        generation: u64,
        result: Result<Vec<Character>, LoadError>,
    },
    ResetDue {
        generation: u64,
    },
}

pub type SessionEventSender = mpsc::UnboundedSender<SessionEvent>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct GameSession {
    state: GameState,
    publisher: watch::Sender<GameState>,
    source: Arc<dyn CharacterSource>,
    /// Characters of the last successful load, reused by New Game.
    characters: Option<Vec<Character>>,
    rng: GameRng,
    mismatch_delay: Duration,
    events: SessionEventSender,
    pending_load: Option<SessionTask>,
    pending_reset: Option<SessionTask>,
}

impl GameSession {
    pub fn new(
        source: Arc<dyn CharacterSource>,
        config: &GameConfig,
        events: SessionEventSender,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::seeded(seed),
            None => GameRng::from_entropy(),
        };
        let (publisher, _) = watch::channel(GameState::default());
        Self {
            state: GameState::default(),
            publisher,
            source,
            characters: None,
            rng,
            mismatch_delay: config.mismatch_delay(),
            events,
            pending_load: None,
            pending_reset: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Receive a snapshot after every state change.
    pub fn subscribe(&self) -> watch::Receiver<GameState> {
        self.publisher.subscribe()
    }

    /// Throw away the current board and deal a new one.
    ///
    /// Any pending flip-back is cancelled first. Characters are fetched only
    /// if no earlier load succeeded.
    pub fn start_new_game(&mut self) {
        self.cancel_pending();
        let generation = self.state.generation + 1;

        match &self.characters {
            Some(characters) => {
                let deck = build_deck(characters, &mut self.rng);
                tracing::info!(generation, cards = deck.len(), "New game started");
                self.dispatch(GameIntent::NewGame { generation, deck });
            }
            None => {
                tracing::info!(generation, "Loading characters for new game");
                self.dispatch(GameIntent::Loading { generation });
                self.spawn_load(generation);
            }
        }
    }

    /// Re-attempt a failed load. Ignored in any other phase.
    pub fn retry_load(&mut self) {
        if matches!(self.state.phase, LoadPhase::Failed { .. }) {
            self.start_new_game();
        }
    }

    /// Pick the card in `slot`. Returns false when the pick was not allowed.
    pub fn select_card(&mut self, slot: usize) -> bool {
        if !self.state.is_selectable(slot) {
            return false;
        }

        let turns_before = self.state.turns;
        self.dispatch(GameIntent::Select { slot });

        if self.state.awaiting_reset() {
            tracing::debug!(delay = ?self.mismatch_delay, "Mismatch, flipping back");
            self.schedule_reset();
        } else if self.state.turns > turns_before {
            tracing::info!(turns = self.state.turns, "Pair matched");
            if self.state.won {
                tracing::info!(turns = self.state.turns, best = ?self.state.best, "Board cleared");
            }
        }
        true
    }

    pub fn handle_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::CharactersLoaded { generation, result } => {
                if generation != self.state.generation {
                    tracing::debug!(generation, "Dropping stale character load");
                    return;
                }
                self.pending_load = None;
                match result {
                    Ok(characters) => {
                        tracing::info!(count = characters.len(), "Characters loaded");
                        let deck = build_deck(&characters, &mut self.rng);
                        self.characters = Some(characters);
                        self.dispatch(GameIntent::NewGame { generation, deck });
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "Character load failed");
                        self.dispatch(GameIntent::LoadFailed {
                            generation,
                            message: format!("{}: {}", err.user_message(), err),
                        });
                    }
                }
            }
            SessionEvent::ResetDue { generation } => {
                if generation == self.state.generation {
                    self.pending_reset = None;
                }
                self.dispatch(GameIntent::ResolveMismatch { generation });
            }
        }
    }

    /// Abort background work. Called on teardown.
    pub fn shutdown(&mut self) {
        self.cancel_pending();
    }

    fn dispatch(&mut self, intent: GameIntent) {
        dispatch_mvi!(self, state, MatchReducer, intent);
        self.publisher.send_replace(self.state.clone());
    }

    fn spawn_load(&mut self, generation: u64) {
        let source = Arc::clone(&self.source);
        let events = self.events.clone();
        self.pending_load = Some(SessionTask::spawn(async move {
            let result = source.load_characters().await;
            let _ = events.send(SessionEvent::CharactersLoaded { generation, result });
        }));
    }

    fn schedule_reset(&mut self) {
        let generation = self.state.generation;
        let events = self.events.clone();
        self.pending_reset = Some(SessionTask::delayed(self.mismatch_delay, async move {
            let _ = events.send(SessionEvent::ResetDue { generation });
        }));
    }

    fn cancel_pending(&mut self) {
        if self.pending_reset.take().is_some() {
            tracing::debug!("Cancelled pending mismatch reset");
        }
        if self.pending_load.take().is_some() {
            tracing::debug!("Cancelled in-flight character load");
        }
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
