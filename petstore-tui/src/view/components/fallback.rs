//! Error boundary fallback

use petstore_core::Fallback;
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::view::theme::Styles;

/// Replace `area` with the fallback panel
pub fn render(fallback: &Fallback, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::styled(
            format!("  {}", fallback.title),
            Styles::error().add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("  {}", fallback.message)),
    ];

    if let Some(label) = &fallback.reset_label {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("[t]", Styles::hint_key()),
            Span::raw(" "),
            Span::styled(label.clone(), Styles::hint_desc()),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::error());

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
