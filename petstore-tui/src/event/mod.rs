//! Event layer
//!
//! Translates terminal input into messages. Key bindings live in
//! [`keymap`]; [`handle_event`] picks the message for the current view.

mod handler;
mod keymap;

pub use handler::handle_event;
