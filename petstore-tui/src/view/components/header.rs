//! Title bar

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::Styles;

/// Render the title bar: app name, API base and current location
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" Pet Store", Styles::title()),
        Span::raw("  ·  "),
        Span::raw(app.api_base.clone()),
        Span::raw("  ·  "),
        Span::raw(app.navigator.location()),
    ]);
    frame.render_widget(Paragraph::new(line).style(Styles::header()), area);
}
