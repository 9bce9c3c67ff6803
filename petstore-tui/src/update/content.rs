//! Content updates

use petstore_core::FetchRequest;

use crate::message::ContentMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: ContentMessage) -> Vec<FetchRequest> {
    match msg {
        ContentMessage::Refresh => app.navigator.refresh(),
        ContentMessage::ResetBoundary => {
            if !app.boundary.has_fault() {
                return Vec::new();
            }
            match app.boundary.reset() {
                Some(ContentMessage::Refresh) => app.navigator.refresh(),
                Some(ContentMessage::ResetBoundary) | None => Vec::new(),
            }
        }
    }
}
