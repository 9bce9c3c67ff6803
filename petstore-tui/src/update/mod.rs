//! Update layer
//!
//! The only place the model changes. Every update returns the fetches the
//! runtime must start; after each message the navigator's history queue is
//! drained so back/forward land in the same turn.

mod content;
mod navigation;

use petstore_core::FetchRequest;

use crate::message::AppMessage;
use crate::model::App;

/// Enter the view for the start location
pub fn start(app: &mut App) -> Vec<FetchRequest> {
    app.navigator.activate()
}

/// Tear down before exit
pub fn stop(app: &mut App) {
    app.navigator.deactivate();
}

/// Apply one message
pub fn update(app: &mut App, msg: AppMessage) -> Vec<FetchRequest> {
    let mut requests = match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            Vec::new()
        }
        AppMessage::Navigation(nav_msg) => navigation::update(app, nav_msg),
        AppMessage::Content(content_msg) => content::update(app, content_msg),
        AppMessage::Fetched(outcome) => {
            app.navigator.resolve(outcome);
            Vec::new()
        }
        AppMessage::Noop => Vec::new(),
    };

    requests.extend(app.navigator.poll_history());
    app.clamp_cursor();
    requests
}
