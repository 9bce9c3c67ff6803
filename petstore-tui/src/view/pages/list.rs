//! Pet list page

use petstore_core::{ListController, Record};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::view::theme::{colors, Styles};

/// Render the random batch with the cursor on `cursor`
pub fn render(list: &ListController, cursor: usize, frame: &mut Frame, area: Rect) {
    let title = if list.is_loading() && list.has_records() {
        " Pets (refreshing...) "
    } else {
        " Pets "
    };
    let block = Block::default()
        .title(title)
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border());

    if list.is_loading() && !list.has_records() {
        render_message(frame, area, block, "Loading pets...", Styles::muted());
    } else if let Some(error) = list.error() {
        render_message(frame, area, block, &format!("Error: {error}"), Styles::error());
    } else if !list.has_records() {
        render_message(frame, area, block, "No pets found.", Styles::muted());
    } else {
        render_records(list.records(), cursor, frame, area, block);
    }
}

fn render_message(frame: &mut Frame, area: Rect, block: Block, message: &str, style: Style) {
    let content = vec![Line::from(""), Line::styled(format!("  {message}"), style)];
    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn render_records(records: &[Record], cursor: usize, frame: &mut Frame, area: Rect, block: Block) {
    let items: Vec<ListItem> = records.iter().map(record_card).collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

/// One record as a two-line card
fn record_card(record: &Record) -> ListItem<'static> {
    let c = colors();

    let mut heading = vec![Span::styled(record.display_name().to_string(), Styles::title())];
    if let Some(status) = record.status {
        heading.push(Span::raw("  "));
        heading.push(Span::styled(
            format!("[{status}]"),
            Style::default().fg(c.status(status)),
        ));
    }

    let mut details = Vec::new();
    if let Some(category) = &record.category {
        details.push(format!("Category: {}", category.display_name()));
    }
    if !record.tags.is_empty() {
        let tags: Vec<&str> = record.tags.iter().map(|tag| tag.name.as_str()).collect();
        details.push(format!("Tags: {}", tags.join(", ")));
    }

    ListItem::new(Text::from(vec![
        Line::from(heading),
        Line::styled(format!("  {}", details.join("  ·  ")), Styles::muted()),
    ]))
}
