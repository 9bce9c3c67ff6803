//! Event handler

use crossterm::event::{Event, KeyEvent, KeyEventKind};
use petstore_core::ViewState;

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, NavigationMessage};
use crate::model::App;

/// Map a terminal event to a message
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(&key, app),
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: &KeyEvent, app: &App) -> AppMessage {
    // Global keys
    if DefaultKeymap::is_quit(key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::is_back(key) {
        return AppMessage::Navigation(NavigationMessage::Back);
    }
    if DefaultKeymap::FORWARD.matches(key) {
        return AppMessage::Navigation(NavigationMessage::Forward);
    }

    // A faulted boundary replaces the content, so only its reset control is live
    if app.boundary.has_fault() {
        if DefaultKeymap::TRY_AGAIN.matches(key) || DefaultKeymap::CONFIRM.matches(key) {
            return AppMessage::Content(ContentMessage::ResetBoundary);
        }
        return AppMessage::Noop;
    }

    if DefaultKeymap::REFRESH.matches(key) {
        return AppMessage::Content(ContentMessage::Refresh);
    }

    match app.view() {
        ViewState::List => handle_list_keys(key),
        ViewState::Detail { .. } => AppMessage::Noop,
    }
}

fn handle_list_keys(key: &KeyEvent) -> AppMessage {
    if DefaultKeymap::is_up(key) {
        AppMessage::Navigation(NavigationMessage::SelectPrevious)
    } else if DefaultKeymap::is_down(key) {
        AppMessage::Navigation(NavigationMessage::SelectNext)
    } else if DefaultKeymap::CONFIRM.matches(key) {
        AppMessage::Navigation(NavigationMessage::OpenSelected)
    } else {
        AppMessage::Noop
    }
}
