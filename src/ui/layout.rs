use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Smallest card cell that still shows a bordered name line.
pub const MIN_CARD_WIDTH: u16 = 8;
pub const MIN_CARD_HEIGHT: u16 = 4;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Split `area` into a row-major grid of `cells` rects, `columns` wide.
pub fn grid_cells(area: Rect, cells: usize, columns: usize) -> Vec<Rect> {
    if cells == 0 || columns == 0 {
        return Vec::new();
    }
    let rows = cells.div_ceil(columns);

    let row_rects = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    row_rects
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(*row)
                .to_vec()
        })
        .take(cells)
        .collect()
}

/// Width and height a `columns`-wide grid of `cells` cards needs.
pub fn grid_min_size(cells: usize, columns: usize) -> (u16, u16) {
    if cells == 0 || columns == 0 {
        return (0, 0);
    }
    let rows = cells.div_ceil(columns);
    let columns = columns.min(cells);
    let width = u16::try_from(columns)
        .unwrap_or(u16::MAX)
        .saturating_mul(MIN_CARD_WIDTH);
    let height = u16::try_from(rows)
        .unwrap_or(u16::MAX)
        .saturating_mul(MIN_CARD_HEIGHT);
    (width, height)
}

pub fn grid_fits(area: Rect, cells: usize, columns: usize) -> bool {
    let (width, height) = grid_min_size(cells, columns);
    area.width >= width && area.height >= height
}
