//! Message layer
//!
//! Bridges Event and Update: every key press and every completed fetch is
//! translated into a message, and the update layer is the only place that
//! acts on them.

mod app;
mod content;
mod navigation;

pub use app::AppMessage;
pub use content::ContentMessage;
pub use navigation::NavigationMessage;
