//! Bottom status bar

use petstore_core::ViewState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::Styles;

/// Render shortcut hints for the current view
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// Shortcut hints for the current state
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    if app.boundary.has_fault() {
        if app.boundary.has_reset_action() {
            hints.push(("t", "Try again"));
        }
        hints.push(("Esc", "Back"));
    } else {
        match app.view() {
            ViewState::List => {
                hints.push(("↑↓", "Select"));
                hints.push(("Enter", "View details"));
                hints.push(("r", "Refresh"));
            }
            ViewState::Detail { .. } => {
                hints.push(("Esc", "Back to pets"));
                let can_refresh = app
                    .navigator
                    .detail()
                    .is_some_and(petstore_core::DetailController::can_refresh);
                if can_refresh {
                    hints.push(("r", "Refresh"));
                }
            }
        }
    }

    if app.navigator.history().can_go_forward() {
        hints.push(("Alt+→", "Forward"));
    }
    hints.push(("q", "Quit"));
    hints
}
