//! View layer
//!
//! Renders the model. The header and status bar are drawn directly; the main
//! content region goes through the app's error boundary so a fault there
//! leaves the surrounding chrome intact.

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
