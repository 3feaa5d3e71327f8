use ratatui::style::Color;

pub const BORDER: Color = Color::Cyan;
pub const SELECTED_BG: Color = Color::Blue;

pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;

pub const LOADING_TEXT: Color = Color::Cyan;
pub const END_TEXT: Color = Color::DarkGray;
pub const ERROR_COLOR: Color = Color::Red;
