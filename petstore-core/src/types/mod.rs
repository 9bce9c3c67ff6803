//! Core data types

mod load_state;
mod record;
mod view;

pub use load_state::LoadState;
pub use record::{Category, Record, RecordStatus, Tag, PLACEHOLDER_IMAGE_URL};
pub use view::{NavigationIntent, ViewState};
