use crate::game::{GameState, LoadPhase};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, PORTAL_GREEN, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A key binding shown in the footer. Urgent hints are the action the
/// player most likely wants next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    pub label: &'static str,
    pub urgent: bool,
}

const fn hint(label: &'static str) -> KeyHint {
    KeyHint { label, urgent: false }
}

const fn urgent(label: &'static str) -> KeyHint {
    KeyHint { label, urgent: true }
}

/// Bindings that do something in the current phase.
pub fn key_hints(state: &GameState) -> Vec<KeyHint> {
    match &state.phase {
        LoadPhase::Loading => vec![hint("N: Restart"), hint("Q: Quit")],
        LoadPhase::Failed { .. } => vec![urgent("R: Retry"), hint("N: New game"), hint("Q: Quit")],
        LoadPhase::Ready if state.won => vec![urgent("N: New game"), hint("Q: Quit")],
        LoadPhase::Ready => vec![
            hint("←↑↓→: Move"),
            hint("Enter: Flip"),
            hint("N: New game"),
            hint("Q: Quit"),
        ],
    }
}

fn urgent_color(state: &GameState) -> Color {
    match state.phase {
        LoadPhase::Failed { .. } => STATUS_ERROR,
        _ => PORTAL_GREEN,
    }
}

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, state: &GameState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let loud = Style::default()
        .fg(urgent_color(state))
        .add_modifier(Modifier::BOLD);
    let separator = Style::default().fg(HEADER_SEPARATOR);

    let mut spans = vec![Span::raw(" ")];
    for (i, key) in key_hints(state).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", separator));
        }
        spans.push(Span::styled(key.label, if key.urgent { loud } else { dim }));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    frame.render_widget(
        Paragraph::new(Span::styled(format!("v{} ", VERSION), dim)).alignment(Alignment::Right),
        inner,
    );
}
