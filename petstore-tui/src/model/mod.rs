//! Model layer
//!
//! The single source of truth for the UI. View state, history and load
//! lifecycles live in the core [`Navigator`](petstore_core::Navigator); this
//! layer only adds what is purely presentational (list cursor, boundary
//! fault, quit flag).

mod app;

pub use app::App;
