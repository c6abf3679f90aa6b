use crate::game::GameState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, PORTAL_GREEN};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title bar with the running score.
pub fn header_widget(state: &GameState) -> Paragraph<'static> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let separator_style = Style::default().fg(HEADER_SEPARATOR);
    let title_style = Style::default()
        .fg(PORTAL_GREEN)
        .add_modifier(Modifier::BOLD);
    let best = state
        .best
        .map(|best| best.to_string())
        .unwrap_or_else(|| "-".to_string());

    let line = Line::from(vec![
        Span::styled("  ", text_style),
        Span::styled("Portal Pairs", title_style),
        Span::styled("  │  ", separator_style),
        Span::styled(format!("Tries: {}", state.turns), text_style),
        Span::styled("  │  ", separator_style),
        Span::styled(format!("Best: {}", best), text_style),
        Span::styled("  │  ", separator_style),
        Span::styled(
            format!("Pairs: {}/{}", state.matched_pairs(), state.total_pairs()),
            text_style,
        ),
    ]);

    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

