//! View controllers
//!
//! Each controller owns the load lifecycle of one view. A controller never
//! performs I/O: starting a load hands out a ticket tagged with the
//! controller's current request generation, and the outcome is applied only if
//! that ticket is still current when it comes back. Newer requests therefore
//! always win, whatever order responses resolve in.

mod detail;
mod list;

pub use detail::{DetailController, DetailSnapshot, DetailTicket};
pub use list::{ListController, ListSnapshot, ListTicket};
