//! Main layout

use petstore_core::{BoundaryOutput, ViewState};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

use crate::model::App;

use super::components;
use super::pages;

/// Render the whole screen: header, boundary-wrapped content, status bar
pub fn render(app: &mut App, frame: &mut Frame) {
    let [header_area, content_area, status_area] = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Min(1),    // main content
        Constraint::Length(1), // status bar
    ])
    .areas(frame.area());

    components::header::render(app, frame, header_area);
    render_content(app, frame, content_area);
    components::statusbar::render(app, frame, status_area);
}

/// Render the active page inside the main boundary
fn render_content(app: &mut App, frame: &mut Frame, area: Rect) {
    let App {
        boundary,
        navigator,
        list_cursor,
        ..
    } = app;

    let output = boundary.render(|| match navigator.view() {
        ViewState::List => {
            pages::list::render(navigator.list(), *list_cursor, frame, area);
            Ok(())
        }
        ViewState::Detail { record_id } => {
            pages::detail::render(navigator.detail(), record_id, frame, area)
        }
    });

    if let BoundaryOutput::Fallback(fallback) = output {
        components::fallback::render(&fallback, frame, area);
    }
}
