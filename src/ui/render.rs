use crate::game::{GameState, LoadPhase};
use crate::ui::app::App;
use crate::ui::board::render_board;
use crate::ui::footer::render_footer;
use crate::ui::header::header_widget;
use crate::ui::layout::{centered_rect, grid_fits, grid_min_size, layout_regions};
use crate::ui::theme::{HEADER_TEXT, POPUP_BORDER, PORTAL_GREEN, STATUS_ERROR};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let state = app.state();

    frame.render_widget(header_widget(state), header);
    frame.render_widget(Clear, body);
    match &state.phase {
        LoadPhase::Loading => render_message(
            frame,
            body,
            vec![Line::from(Span::styled(
                "Opening a portal... fetching characters",
                Style::default().fg(PORTAL_GREEN),
            ))],
        ),
        LoadPhase::Failed { message } => render_message(
            frame,
            body,
            vec![
                Line::from(Span::styled(
                    "Character load failed",
                    Style::default()
                        .fg(STATUS_ERROR)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(message.clone(), Style::default().fg(HEADER_TEXT))),
                Line::from(""),
                Line::from(Span::styled(
                    "Press R to retry",
                    Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
                )),
            ],
        ),
        LoadPhase::Ready if !grid_fits(body, state.deck.len(), app.columns()) => {
            let (width, height) = grid_min_size(state.deck.len(), app.columns());
            render_message(
                frame,
                body,
                vec![
                    Line::from(Span::styled(
                        "Terminal too small",
                        Style::default()
                            .fg(STATUS_ERROR)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        format!("The board needs {}x{}, have {}x{}", width, height, body.width, body.height),
                        Style::default().fg(HEADER_TEXT),
                    )),
                ],
            )
        }
        LoadPhase::Ready => render_board(frame, body, state, app.cursor(), app.columns()),
    }
    render_footer(frame, footer, state);

    if state.won {
        render_win_popup(frame, state);
    }
}

fn render_message(frame: &mut Frame<'_>, area: Rect, lines: Vec<Line<'static>>) {
    let panel = centered_rect(70, 40, area);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        panel,
    );
}

fn render_win_popup(frame: &mut Frame<'_>, state: &GameState) {
    let area = centered_rect(50, 40, frame.area());
    let sparkle = Style::default().fg(PORTAL_GREEN).add_modifier(Modifier::BOLD);
    let text = Style::default().fg(HEADER_TEXT);

    let mut lines = vec![
        Line::from(Span::styled("*  .  *  .  *  .  *", sparkle)),
        Line::from(""),
        Line::from(Span::styled(
            format!("You won in {} tries!", state.turns),
            text.add_modifier(Modifier::BOLD),
        )),
    ];
    if state.best == Some(state.turns) {
        lines.push(Line::from(Span::styled("New best!", sparkle)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press N for a new game",
        text.add_modifier(Modifier::DIM),
    )));
    lines.push(Line::from(Span::styled("*  .  *  .  *  .  *", sparkle)));

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .title(" Wubba lubba dub dub ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        ),
        area,
    );
}
