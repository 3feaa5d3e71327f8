use crate::app::App;
use crate::components::*;
use crate::theme::*;
use infiniscroll_domain::PageFetcher;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

const HELP_TEXT: &str = "j/k: move  PgDn/PgUp: page  g/G: top/bottom  r: retry  R: refresh  Enter: detail  q: quit";

pub fn render<F: PageFetcher>(app: &mut App<F>, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);

    if app.show_detail {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);
        render_list(app, frame, body[0]);
        render_detail(frame, body[1], app.selected_record());
    } else {
        render_list(app, frame, chunks[1]);
    }

    render_footer(frame, chunks[2]);
}

fn render_header<F: PageFetcher>(app: &App<F>, frame: &mut Frame, area: Rect) {
    let state = app.paginator.state();
    let status = if state.is_loading {
        Span::styled(format!("loading page {}", state.next_page), loading_text())
    } else if state.last_error.is_some() {
        Span::styled("load failed", error_text())
    } else if state.is_exhausted {
        Span::styled("all pages loaded", end_text())
    } else {
        Span::styled(format!("next page {}", state.next_page), label_text())
    };

    let line = Line::from(vec![
        Span::styled(app.title.clone(), bold_highlight()),
        Span::raw("  "),
        Span::styled(
            format!("{} loaded", app.paginator.records().len()),
            normal_text(),
        ),
        Span::styled("  |  ", label_text()),
        status,
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border()),
    );
    frame.render_widget(header, area);
}

fn render_list<F: PageFetcher>(app: &mut App<F>, frame: &mut Frame, area: Rect) {
    app.list.set_height(area.height.saturating_sub(2) as usize);

    let window = app.list.window();
    let selected = app.list.selected();
    let spinner = app.spinner_frame();

    let rows = app.paginator.rows();
    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .skip(window.first_visible)
        .take(window.visible_count)
        .map(|(idx, row)| {
            let config = ListItemConfig::new()
                .selected(selected == Some(idx))
                .spinner(spinner);
            ListItem::new(row_line(row, &config))
        })
        .collect();

    let below = app.list.rows_below();
    let title = if below > 0 {
        format!("Items ({} more below)", below)
    } else {
        "Items".to_string()
    };

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border())
            .title(title),
    );
    frame.render_widget(list, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(Span::styled(HELP_TEXT, label_text())))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, area);
}
