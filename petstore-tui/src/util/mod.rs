//! Util layer: terminal setup and logging

mod logging;
mod terminal;

pub use logging::{init_logging, install_panic_hook};
pub use terminal::{init_terminal, restore_terminal, Term};
