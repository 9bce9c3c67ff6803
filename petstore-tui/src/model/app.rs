//! Main application state

use petstore_core::{ErrorBoundary, MemoryHistory, Navigator, Record, ViewState};

use crate::message::ContentMessage;

/// Name of the boundary around the main content region
pub const MAIN_BOUNDARY: &str = "main-content";

pub struct App {
    /// Whether the main loop should exit
    pub should_quit: bool,
    /// View routing and data state
    pub navigator: Navigator<MemoryHistory>,
    /// Cursor position in the list view
    pub list_cursor: usize,
    /// Contains faults raised while rendering the main content
    pub boundary: ErrorBoundary<ContentMessage>,
    /// API base URL shown in the header
    pub api_base: String,
}

impl App {
    pub fn new(start_path: &str, api_base: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            navigator: Navigator::new(MemoryHistory::new(start_path)),
            list_cursor: 0,
            boundary: ErrorBoundary::new(MAIN_BOUNDARY).with_reset_action(ContentMessage::Refresh),
            api_base: api_base.into(),
        }
    }

    pub fn view(&self) -> &ViewState {
        self.navigator.view()
    }

    /// Record under the list cursor
    pub fn selected_record(&self) -> Option<&Record> {
        self.navigator.list().records().get(self.list_cursor)
    }

    /// Keep the cursor inside the current list
    pub fn clamp_cursor(&mut self) {
        let len = self.navigator.list().records().len();
        self.list_cursor = self.list_cursor.min(len.saturating_sub(1));
    }
}
