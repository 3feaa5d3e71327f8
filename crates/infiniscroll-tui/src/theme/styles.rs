use super::colors::*;
use ratatui::style::{Modifier, Style};

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

pub fn selected_item() -> Style {
    Style::default().bg(SELECTED_BG)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn bold_highlight() -> Style {
    Style::default()
        .fg(HIGHLIGHT_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn loading_text() -> Style {
    Style::default()
        .fg(LOADING_TEXT)
        .add_modifier(Modifier::ITALIC)
}

pub fn end_text() -> Style {
    Style::default().fg(END_TEXT)
}

pub fn error_text() -> Style {
    Style::default()
        .fg(ERROR_COLOR)
        .add_modifier(Modifier::BOLD)
}
