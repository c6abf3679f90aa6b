use ratatui::style::Color;

pub const PORTAL_GREEN: Color = Color::Rgb(0x97, 0xce, 0x4c);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const CARD_COVER: Color = Color::Rgb(0x1e, 0x3a, 0x5f);
pub const CURSOR: Color = Color::Rgb(0xf5, 0xc5, 0x18);
