//! Navigation updates

use petstore_core::{FetchRequest, NavigationIntent, ViewState};

use crate::message::NavigationMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: NavigationMessage) -> Vec<FetchRequest> {
    match msg {
        NavigationMessage::SelectPrevious => {
            app.list_cursor = app.list_cursor.saturating_sub(1);
            Vec::new()
        }
        NavigationMessage::SelectNext => {
            if app.list_cursor + 1 < app.navigator.list().records().len() {
                app.list_cursor += 1;
            }
            Vec::new()
        }
        NavigationMessage::OpenSelected => {
            if *app.view() != ViewState::List {
                return Vec::new();
            }
            match app.selected_record().map(|record| record.id) {
                Some(id) => app.navigator.select_record(id),
                None => Vec::new(),
            }
        }
        NavigationMessage::Back => app.navigator.back(),
        NavigationMessage::Forward => app.navigator.dispatch(NavigationIntent::Forward),
    }
}
