//! Top-level messages

use petstore_core::FetchOutcome;

use super::{ContentMessage, NavigationMessage};

#[derive(Debug)]
pub enum AppMessage {
    /// Leave the application
    Quit,
    /// Movement between and within views
    Navigation(NavigationMessage),
    /// Actions on the active view's data
    Content(ContentMessage),
    /// A fetch issued earlier has completed
    Fetched(FetchOutcome),
    /// Nothing to do
    Noop,
}
