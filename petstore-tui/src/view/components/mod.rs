//! Shared UI components

pub mod fallback;
pub mod header;
pub mod statusbar;
