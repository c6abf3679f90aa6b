use crate::game::{Card, GameState};
use crate::ui::layout::grid_cells;
use crate::ui::theme::{CARD_COVER, CURSOR, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const COVER_GLYPH: &str = "?";

/// How a single card cell is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    Hidden,
    Revealed,
    Mismatched,
    Matched,
}

pub fn card_face(state: &GameState, slot: usize) -> CardFace {
    let Some(card) = state.deck.get(slot) else {
        return CardFace::Hidden;
    };
    if card.matched {
        CardFace::Matched
    } else if state.awaiting_reset() && state.is_face_up(slot) {
        CardFace::Mismatched
    } else if state.is_face_up(slot) {
        CardFace::Revealed
    } else {
        CardFace::Hidden
    }
}

pub fn render_board(frame: &mut Frame<'_>, area: Rect, state: &GameState, cursor: usize, columns: usize) {
    let cells = grid_cells(area, state.deck.len(), columns);
    for (slot, (card, cell)) in state.deck.iter().zip(cells).enumerate() {
        let face = card_face(state, slot);
        frame.render_widget(card_widget(card, face, slot == cursor), cell);
    }
}

fn card_widget(card: &Card, face: CardFace, under_cursor: bool) -> Paragraph<'static> {
    let border_color = match face {
        _ if under_cursor => CURSOR,
        CardFace::Matched => STATUS_OK,
        CardFace::Mismatched => STATUS_ERROR,
        CardFace::Revealed => HEADER_TEXT,
        CardFace::Hidden => GLOBAL_BORDER,
    };
    let mut border_style = Style::default().fg(border_color);
    if under_cursor {
        border_style = border_style.add_modifier(Modifier::BOLD);
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines = match face {
        CardFace::Hidden => vec![
            Line::from(""),
            Line::from(Span::styled(
                COVER_GLYPH,
                Style::default().fg(CARD_COVER).add_modifier(Modifier::BOLD),
            )),
        ],
        _ => {
            let name_style = match face {
                CardFace::Matched => Style::default().fg(STATUS_OK),
                CardFace::Mismatched => Style::default().fg(STATUS_ERROR),
                _ => Style::default().fg(HEADER_TEXT),
            };
            let mut lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    card.character.name.clone(),
                    name_style.add_modifier(Modifier::BOLD),
                )),
            ];
            if let Some(species) = card.character.extra_str("species") {
                lines.push(Line::from(Span::styled(
                    species.to_string(),
                    name_style.add_modifier(Modifier::DIM),
                )));
            }
            lines
        }
    };

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block)
}
