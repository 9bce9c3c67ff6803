//! Pet Store client core
//!
//! The view-state and data-synchronization machine behind the pet store client:
//! - Which view is active (list or detail), kept in sync with the address bar
//! - Per-view load lifecycles (pending / ready / failed / not found)
//! - Stale-response discarding via request generations
//! - Render-fault containment for presentation subtrees
//!
//! The crate never renders and never awaits inside a state transition. State
//! changes return [`FetchRequest`]s; the host runtime executes them through a
//! [`FetchGateway`] and feeds the [`FetchOutcome`] back into the [`Navigator`].

pub mod boundary;
pub mod config;
pub mod controllers;
pub mod driver;
pub mod error;
pub mod gateway;
pub mod history;
pub mod navigator;
pub mod route;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use boundary::{BoundaryOutput, ErrorBoundary, Fallback, RenderFault};
pub use config::ClientConfig;
pub use controllers::{DetailController, DetailSnapshot, ListController, ListSnapshot};
pub use driver::{execute, execute_all, settle, FetchOutcome, FetchRequest};
pub use error::{ConfigError, FetchError, FetchResult};
pub use gateway::{FetchGateway, HttpGateway};
pub use history::{BrowserHistory, HistoryEvent, HistorySubscription, MemoryHistory};
pub use navigator::Navigator;
pub use types::{Category, LoadState, NavigationIntent, Record, RecordStatus, Tag, ViewState};
