//! Backend layer
//!
//! Services the UI loop relies on but that hold no UI state: the config file
//! and the task spawner that runs the core's fetch requests.

mod config_service;
mod fetch_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use fetch_service::FetchService;
