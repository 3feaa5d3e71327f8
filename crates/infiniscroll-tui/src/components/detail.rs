use crate::theme::{border, label_text, normal_text};
use infiniscroll_domain::Record;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn metadata_line<'a>(label: &'a str, value: impl Into<String>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), label_text()),
        Span::styled(value.into(), normal_text()),
    ])
}

/// Renders every field of the selected record, or a hint when nothing is
/// selected.
pub fn render_detail<R: Record>(frame: &mut Frame, area: Rect, record: Option<&R>) {
    let lines: Vec<Line<'static>> = match record {
        Some(record) => record
            .fields()
            .into_iter()
            .map(|(label, value)| metadata_line(label, value))
            .collect(),
        None => vec![Line::from(Span::styled("Nothing selected", label_text()))],
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border())
        .title("Detail");

    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(widget, area);
}
