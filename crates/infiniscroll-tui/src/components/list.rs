use crate::theme::{end_text, error_text, label_text, loading_text, normal_text, selected_item};
use infiniscroll_domain::{FooterState, Record, Row};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

pub struct ListItemConfig {
    pub is_selected: bool,
    pub spinner_frame: usize,
}

impl ListItemConfig {
    pub fn new() -> Self {
        Self {
            is_selected: false,
            spinner_frame: 0,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    pub fn spinner(mut self, frame: usize) -> Self {
        self.spinner_frame = frame;
        self
    }

    fn apply(&self, style: Style) -> Style {
        if self.is_selected {
            style.patch(selected_item())
        } else {
            style
        }
    }

    pub fn item_prefix(&self) -> &'static str {
        if self.is_selected {
            "► "
        } else {
            "  "
        }
    }
}

impl Default for ListItemConfig {
    fn default() -> Self {
        Self::new()
    }
}

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn styled_record_item<R: Record>(record: &R, config: &ListItemConfig) -> Line<'static> {
    let detail = record.detail();
    let mut spans = vec![
        Span::styled(config.item_prefix(), config.apply(normal_text())),
        Span::styled(record.headline(), config.apply(normal_text())),
    ];
    if !detail.is_empty() {
        spans.push(Span::styled("  ", config.apply(normal_text())));
        spans.push(Span::styled(detail, config.apply(label_text())));
    }
    Line::from(spans)
}

pub fn footer_line(footer: &FooterState, config: &ListItemConfig) -> Line<'static> {
    let prefix = config.item_prefix();
    match footer {
        FooterState::Idle => Line::from(Span::styled(prefix, config.apply(label_text()))),
        FooterState::Loading => {
            let frame = SPINNER[config.spinner_frame % SPINNER.len()];
            Line::from(Span::styled(
                format!("{}{} Loading more...", prefix, frame),
                config.apply(loading_text()),
            ))
        }
        FooterState::Error(message) => Line::from(vec![
            Span::styled(
                format!("{}Failed to load: {}", prefix, message),
                config.apply(error_text()),
            ),
            Span::styled("  (r to retry)", config.apply(label_text())),
        ]),
        FooterState::End => Line::from(Span::styled(
            format!("{}End of list", prefix),
            config.apply(end_text()),
        )),
    }
}

pub fn row_line<R: Record>(row: &Row<'_, R>, config: &ListItemConfig) -> Line<'static> {
    match row {
        Row::Item { record, .. } => styled_record_item(*record, config),
        Row::Footer(footer) => footer_line(footer, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_footer_lines() {
        let config = ListItemConfig::new();
        assert_eq!(
            text(&footer_line(&FooterState::Loading, &config.spinner(1))),
            "  / Loading more..."
        );

        let config = ListItemConfig::new().selected(true);
        assert_eq!(
            text(&footer_line(&FooterState::Error("server returned 500".into()), &config)),
            "► Failed to load: server returned 500  (r to retry)"
        );
        assert_eq!(
            text(&footer_line(&FooterState::End, &ListItemConfig::new())),
            "  End of list"
        );
    }
}
