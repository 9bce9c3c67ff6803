//! Pet detail page

use petstore_core::{DetailController, DetailSnapshot, RenderFault};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::view::theme::{colors, Styles};

/// Render the record loaded by `detail`.
///
/// The detail controller is mounted whenever the detail view is active; a
/// missing one is a render fault.
pub fn render(
    detail: Option<&DetailController>,
    record_id: &str,
    frame: &mut Frame,
    area: Rect,
) -> Result<(), RenderFault> {
    let detail = detail.ok_or_else(|| {
        RenderFault::new(format!("No detail state for pet {record_id}"))
    })?;
    let snapshot = detail.snapshot();

    let block = Block::default()
        .title(format!(" Pet {record_id} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border());

    let lines = body(&snapshot);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
    Ok(())
}

fn body(snapshot: &DetailSnapshot) -> Vec<Line<'static>> {
    let Some(record) = &snapshot.record else {
        let (message, style) = if snapshot.is_loading {
            ("Loading pet details...".to_string(), Styles::muted())
        } else if let Some(error) = &snapshot.error {
            (format!("Error: {error}"), Styles::error())
        } else {
            ("Pet not found".to_string(), Styles::muted())
        };
        return vec![Line::from(""), Line::styled(format!("  {message}"), style)];
    };

    let c = colors();
    let mut heading = vec![
        Span::raw("  "),
        Span::styled(
            record.display_name().to_string(),
            Styles::title().add_modifier(Modifier::UNDERLINED),
        ),
    ];
    if let Some(status) = record.status {
        heading.push(Span::raw("  "));
        heading.push(Span::styled(
            status.to_string(),
            Style::default().fg(c.status(status)),
        ));
    }
    if snapshot.is_loading {
        heading.push(Span::styled("  (refreshing...)", Styles::muted()));
    }

    let mut lines = vec![
        Line::from(""),
        Line::from(heading),
        Line::from(""),
        labelled("Image", record.image_url().to_string()),
    ];
    if let Some(category) = &record.category {
        lines.push(labelled("Category", category.display_name().to_string()));
    }
    if !record.tags.is_empty() {
        let tags: Vec<&str> = record.tags.iter().map(|tag| tag.name.as_str()).collect();
        lines.push(labelled("Tags", tags.join(", ")));
    }
    lines
}

fn labelled(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label}: "), Styles::muted()),
        Span::raw(value),
    ])
}
