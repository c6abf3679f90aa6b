use crate::config::Config;
use crate::loader::RickAndMortyClient;
use crate::session::GameSession;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

pub async fn run(config: Config) -> anyhow::Result<()> {
    let source = Arc::new(RickAndMortyClient::new(&config.api, config.game.pairs)?);
    let (session_tx, mut session_rx) = mpsc::unbounded_channel();
    let session = GameSession::new(source, &config.game, session_tx);
    let mut app = App::new(session, config.ui.columns);

    let (mut terminal, guard) = setup_terminal()?;
    let mut events = EventHandler::new(config.ui.tick_rate());
    app.new_game();

    let result = loop {
        if let Err(err) = terminal.draw(|frame| draw(frame, &app)) {
            break Err(err.into());
        }
        if app.should_quit() {
            break Ok(());
        }

        tokio::select! {
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => handle_key(&mut app, key),
                // The next draw picks up the new frame size.
                Some(AppEvent::Resize) | Some(AppEvent::Tick) => {}
                None => break Ok(()),
            },
            Some(event) = session_rx.recv() => app.on_session_event(event),
            _ = tokio::signal::ctrl_c() => app.request_quit(),
        }
    };

    app.shutdown();
    drop(guard);
    tracing::info!("Session closed");
    result
}
