mod common;

use common::{dealt_session, mismatched_slots, new_session, pair_slots, roster, Outcome, StubSource};
use portal_pairs::game::LoadPhase;
use portal_pairs::session::SessionEvent;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn new_game_loads_then_deals() {
    let (mut session, mut rx) = new_session(StubSource::new());
    session.start_new_game();
    assert_eq!(session.state().phase, LoadPhase::Loading);

    let event = rx.recv().await.unwrap();
    session.handle_event(event);

    let state = session.state();
    assert_eq!(state.phase, LoadPhase::Ready);
    assert_eq!(state.deck.len(), 8);
    assert_eq!(state.turns, 0);
    assert!(!state.won);
    assert_eq!(pair_slots(state).len(), 4);
}

#[tokio::test(start_paused = true)]
async fn subscribers_see_every_snapshot() {
    let (mut session, mut rx) = new_session(StubSource::new());
    let mut snapshots = session.subscribe();

    session.start_new_game();
    assert!(snapshots.has_changed().unwrap());
    assert_eq!(snapshots.borrow_and_update().phase, LoadPhase::Loading);

    let event = rx.recv().await.unwrap();
    session.handle_event(event);
    assert_eq!(snapshots.borrow_and_update().deck.len(), 8);

    let slot = pair_slots(session.state())[0].0;
    session.select_card(slot);
    assert_eq!(snapshots.borrow_and_update().choice_one, Some(slot));
}

#[tokio::test(start_paused = true)]
async fn matching_pair_flips_both_and_counts_turn() {
    let (mut session, _rx) = dealt_session(StubSource::new()).await;
    let (a1, a2) = pair_slots(session.state())[0];

    assert!(session.select_card(a1));
    assert!(session.select_card(a2));

    let state = session.state();
    assert!(state.deck[a1].matched);
    assert!(state.deck[a2].matched);
    assert_eq!(state.matched_pairs(), 1);
    assert_eq!(state.turns, 1);
    assert_eq!(state.choice_one, None);
    assert_eq!(state.choice_two, None);
    assert!(!state.disabled);
    assert!(!state.won);
}

#[tokio::test(start_paused = true)]
async fn mismatch_flips_back_after_delay() {
    let (mut session, mut rx) = dealt_session(StubSource::new()).await;
    let (a, b) = mismatched_slots(session.state());

    session.select_card(a);
    session.select_card(b);
    assert!(session.state().disabled);
    assert_eq!(session.state().turns, 0);

    let started = Instant::now();
    let event = rx.recv().await.unwrap();
    assert!(matches!(event, SessionEvent::ResetDue { .. }));
    assert!(started.elapsed() >= Duration::from_millis(1000));
    session.handle_event(event);

    let state = session.state();
    assert_eq!(state.choice_one, None);
    assert_eq!(state.choice_two, None);
    assert!(!state.disabled);
    assert_eq!(state.turns, 1);
    assert!(state.deck.iter().all(|card| !card.matched));
    assert!(!state.won);
}

#[tokio::test(start_paused = true)]
async fn picks_are_rejected_while_mismatch_is_pending() {
    let (mut session, _rx) = dealt_session(StubSource::new()).await;
    let pairs = pair_slots(session.state());
    let (a, b) = mismatched_slots(session.state());

    session.select_card(a);
    session.select_card(b);
    let before = session.state().clone();

    assert!(!session.select_card(pairs[2].0));
    assert_eq!(session.state(), &before);
}

#[tokio::test(start_paused = true)]
async fn matched_or_chosen_cards_cannot_be_picked() {
    let (mut session, _rx) = dealt_session(StubSource::new()).await;
    let (a1, a2) = pair_slots(session.state())[0];
    let (b1, _) = pair_slots(session.state())[1];

    session.select_card(a1);
    session.select_card(a2);
    assert!(!session.select_card(a1));

    session.select_card(b1);
    assert!(!session.select_card(b1));
    assert_eq!(session.state().turns, 1);
}

#[tokio::test(start_paused = true)]
async fn new_game_cancels_pending_reset() {
    let source = StubSource::new();
    let (mut session, mut rx) = dealt_session(Arc::clone(&source)).await;
    let (a, b) = mismatched_slots(session.state());
    session.select_card(a);
    session.select_card(b);

    session.start_new_game();
    let state = session.state().clone();
    assert_eq!(state.phase, LoadPhase::Ready);
    assert_eq!(state.turns, 0);
    assert!(!state.disabled);
    assert_eq!(state.choice_one, None);
    assert_eq!(state.generation, 2);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    assert_eq!(session.state(), &state);
    // Characters are reused for the second board.
    assert_eq!(source.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn stale_reset_cannot_touch_new_board() {
    let (mut session, mut rx) = dealt_session(StubSource::new()).await;
    let (a, b) = mismatched_slots(session.state());
    session.select_card(a);
    session.select_card(b);

    // Let the timer fire, but deliver its event only after a new game.
    let stale = rx.recv().await.unwrap();
    session.start_new_game();
    let slot = pair_slots(session.state())[0].0;
    session.select_card(slot);
    let before = session.state().clone();

    session.handle_event(stale);
    assert_eq!(session.state(), &before);
}

#[tokio::test(start_paused = true)]
async fn clearing_all_pairs_wins_on_fourth_match() {
    let (mut session, _rx) = dealt_session(StubSource::new()).await;
    let pairs = pair_slots(session.state());

    for (i, (first, second)) in pairs.iter().enumerate() {
        assert!(!session.state().won);
        session.select_card(*first);
        session.select_card(*second);
        assert_eq!(session.state().turns, i as u32 + 1);
    }

    let state = session.state();
    assert!(state.won);
    assert_eq!(state.turns, 4);
    assert_eq!(state.best, Some(4));
    assert!(state.deck.iter().all(|card| card.matched));
}

#[tokio::test(start_paused = true)]
async fn win_freezes_board_until_new_game() {
    let (mut session, _rx) = dealt_session(StubSource::new()).await;
    for (first, second) in pair_slots(session.state()) {
        session.select_card(first);
        session.select_card(second);
    }
    assert!(session.state().won);
    assert!(!session.select_card(0));

    session.start_new_game();
    let state = session.state();
    assert!(!state.won);
    assert_eq!(state.turns, 0);
    assert_eq!(state.best, Some(4));
    assert!(state.deck.iter().all(|card| !card.matched));
}

#[tokio::test(start_paused = true)]
async fn load_failure_is_surfaced_and_retry_recovers() {
    let source = StubSource::scripted(vec![Outcome::HttpStatus(503)]);
    let (mut session, mut rx) = new_session(Arc::clone(&source));

    session.start_new_game();
    let event = rx.recv().await.unwrap();
    session.handle_event(event);

    match &session.state().phase {
        LoadPhase::Failed { message } => assert!(message.contains("503")),
        other => panic!("expected Failed, got {:?}", other),
    }
    assert!(session.state().deck.is_empty());
    assert!(!session.state().won);

    session.retry_load();
    assert_eq!(session.state().phase, LoadPhase::Loading);
    let event = rx.recv().await.unwrap();
    session.handle_event(event);

    assert_eq!(session.state().phase, LoadPhase::Ready);
    assert_eq!(session.state().deck.len(), 8);
    assert_eq!(source.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn short_roster_still_deals_what_was_returned() {
    let source = StubSource::scripted(vec![Outcome::Characters(roster()[..2].to_vec())]);
    let (session, _rx) = dealt_session(source).await;
    assert_eq!(session.state().deck.len(), 4);
}

#[tokio::test(start_paused = true)]
async fn retry_is_ignored_unless_failed() {
    let source = StubSource::new();
    let (mut session, _rx) = dealt_session(Arc::clone(&source)).await;
    let before = session.state().clone();

    session.retry_load();
    assert_eq!(session.state(), &before);
    assert_eq!(source.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn seeded_sessions_deal_identical_boards() {
    let (first, _rx1) = dealt_session(StubSource::new()).await;
    let (second, _rx2) = dealt_session(StubSource::new()).await;

    let ids = |state: &portal_pairs::game::GameState| -> Vec<u64> {
        state.deck.iter().map(|card| card.pair_id()).collect()
    };
    assert_eq!(ids(first.state()), ids(second.state()));
}

#[tokio::test(start_paused = true)]
async fn restarting_mid_load_drops_the_superseded_result() {
    let source = StubSource::new();
    let (mut session, mut rx) = new_session(Arc::clone(&source));

    session.start_new_game();
    session.start_new_game();
    assert_eq!(session.state().generation, 2);
    assert_eq!(session.state().phase, LoadPhase::Loading);

    // A result for the first game arriving late must not deal a board.
    session.handle_event(SessionEvent::CharactersLoaded {
        generation: 1,
        result: Ok(roster()),
    });
    assert_eq!(session.state().phase, LoadPhase::Loading);
    assert_eq!(session.state().generation, 2);
    assert!(session.state().deck.is_empty());

    let event = rx.recv().await.unwrap();
    assert!(matches!(
        event,
        SessionEvent::CharactersLoaded { generation: 2, .. }
    ));
    session.handle_event(event);
    assert_eq!(session.state().phase, LoadPhase::Ready);
    assert_eq!(session.state().deck.len(), 8);

    // The first load was aborted, so nothing else is queued.
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(matches!(rx.try_recv(), Err(TryRecvError::Empty)));
    assert_eq!(source.calls(), 1);
}
