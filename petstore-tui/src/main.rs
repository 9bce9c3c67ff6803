//! Pet Store terminal client
//!
//! Elm-style layout:
//! - **Model**: UI state around the core navigator (`model/`)
//! - **Message**: everything that can happen (`message/`)
//! - **Update**: the only place state changes (`update/`)
//! - **View**: rendering (`view/`)
//! - **Event**: key handling (`event/`)
//! - **Backend**: config file and fetch tasks (`backend/`)
//!
//! Usage: `petstore [PATH]`, where `PATH` is the start location, e.g.
//! `/pet/10`. The API base URL comes from the config file or
//! `PETSTORE_API_URL`.

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::Result;
use petstore_core::HttpGateway;

use backend::{ConfigService, FetchService, LocalConfigService};
use util::{init_logging, init_terminal, install_panic_hook, restore_terminal};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 1. Load config and start logging
    let config_service = LocalConfigService::new();
    let mut config = config_service.load()?;
    let _log_guard = init_logging(&config.log_dir)?;
    install_panic_hook();

    if !config_service.path().exists() {
        if let Err(e) = config_service.save(&config) {
            log::warn!("Could not write default config: {e}");
        }
    }

    config.client = config.client.with_env_override();
    view::theme::set_theme(config.theme);

    // 2. Build the gateway
    let gateway = HttpGateway::new(&config.client)?;
    log::info!("Using API at {}", gateway.base_url());
    let (fetches, outcomes) = FetchService::new(Arc::new(gateway));

    // 3. Create the app at the requested location
    let start_path = std::env::args().nth(1).unwrap_or_else(|| "/".to_string());
    let mut app = model::App::new(&start_path, config.client.base_url.clone());

    // 4. Run, then restore the terminal whether or not the loop failed
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &fetches, outcomes).await;
    restore_terminal(&mut terminal)?;

    if let Err(e) = &result {
        log::error!("Exited with error: {e:#}");
    }
    result
}
