//! Detail view controller

use serde::Serialize;
use serde_json::Value;

use crate::error::{FetchError, FetchResult};
use crate::route;
use crate::types::{LoadState, NavigationIntent, Record};

/// Marks one detail fetch with the record id and generation it was issued for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTicket {
    record_id: String,
    generation: u64,
}

impl DetailTicket {
    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// API endpoint this ticket fetches
    pub fn path(&self) -> String {
        route::record_path(&self.record_id)
    }
}

/// Renderable state of the detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailSnapshot {
    pub record_id: String,
    pub record: Option<Record>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub is_not_found: bool,
    pub can_refresh: bool,
}

/// Loads and holds one record by identifier.
///
/// `Ready(None)` is the not-found outcome: the fetch succeeded but the
/// server had no record.
#[derive(Debug)]
pub struct DetailController {
    record_id: String,
    state: LoadState<Option<Record>>,
    /// Record kept visible while a refresh of the same id is pending
    stale: Option<Record>,
    generation: u64,
}

impl DetailController {
    /// Mount for `record_id` and issue the initial fetch
    pub fn mount(record_id: impl Into<String>) -> (Self, DetailTicket) {
        Self::mount_after(record_id, 0)
    }

    /// Mount with generations continuing after `previous`.
    ///
    /// Pass the last generation of an earlier mount so its late tickets can
    /// never match this controller.
    pub fn mount_after(record_id: impl Into<String>, previous: u64) -> (Self, DetailTicket) {
        let mut controller = Self {
            record_id: record_id.into(),
            state: LoadState::Idle,
            stale: None,
            generation: previous,
        };
        let ticket = controller.issue();
        (controller, ticket)
    }

    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    /// Generation of the latest issued ticket
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Switch to another record id.
    ///
    /// Discards the current load state and issues a fetch for the new id.
    /// Returns `None` if the id is unchanged.
    pub fn set_record_id(&mut self, record_id: impl Into<String>) -> Option<DetailTicket> {
        let record_id = record_id.into();
        if record_id == self.record_id {
            return None;
        }

        log::debug!("Detail record id {} -> {record_id}", self.record_id);
        self.record_id = record_id;
        self.state = LoadState::Idle;
        self.stale = None;
        Some(self.issue())
    }

    /// Whether `refresh` would issue a request
    pub fn can_refresh(&self) -> bool {
        matches!(self.state, LoadState::Ready(Some(_)) | LoadState::Failed(_))
    }

    /// Re-fetch the current record.
    ///
    /// Only valid from a loaded record or a failure; a no-op while pending
    /// or after not-found.
    pub fn refresh(&mut self) -> Option<DetailTicket> {
        if !self.can_refresh() {
            log::debug!("Ignoring detail refresh for {} while not settled", self.record_id);
            return None;
        }
        Some(self.issue())
    }

    /// Apply a fetch outcome. Returns `false` if the ticket no longer matches
    /// the current record id and generation.
    pub fn apply(&mut self, ticket: &DetailTicket, result: FetchResult<Value>) -> bool {
        if ticket.record_id != self.record_id || ticket.generation != self.generation {
            log::debug!(
                "Discarding stale detail response for {} (current {})",
                ticket.record_id,
                self.record_id
            );
            return false;
        }
        if !self.state.is_pending() {
            return false;
        }

        self.stale = None;
        self.state = match result.and_then(decode_record) {
            Ok(Some(record)) => LoadState::Ready(Some(record)),
            Ok(None) => {
                log::info!("Record {} not found", self.record_id);
                LoadState::Ready(None)
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Detail load for {} failed: {e}", self.record_id);
                } else {
                    log::error!("Detail load for {} failed: {e}", self.record_id);
                }
                LoadState::Failed(format!("Failed to fetch pet details: {e}"))
            }
        };
        true
    }

    /// Navigation intent for returning to the previous history entry
    #[allow(clippy::unused_self)]
    pub fn back(&self) -> NavigationIntent {
        NavigationIntent::Back
    }

    pub fn state(&self) -> &LoadState<Option<Record>> {
        &self.state
    }

    /// Record to display: the loaded one, or the previous one during a refresh
    pub fn record(&self) -> Option<&Record> {
        match &self.state {
            LoadState::Ready(record) => record.as_ref(),
            LoadState::Pending => self.stale.as_ref(),
            LoadState::Idle | LoadState::Failed(_) => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_pending()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.state, LoadState::Ready(None))
    }

    pub fn snapshot(&self) -> DetailSnapshot {
        DetailSnapshot {
            record_id: self.record_id.clone(),
            record: self.record().cloned(),
            is_loading: self.is_loading(),
            error: self.error().map(str::to_string),
            is_not_found: self.is_not_found(),
            can_refresh: self.can_refresh(),
        }
    }

    fn issue(&mut self) -> DetailTicket {
        self.generation += 1;

        if let LoadState::Ready(record) = std::mem::replace(&mut self.state, LoadState::Pending) {
            self.stale = record;
        }

        log::debug!(
            "Detail load issued for {} (generation {})",
            self.record_id,
            self.generation
        );
        DetailTicket {
            record_id: self.record_id.clone(),
            generation: self.generation,
        }
    }
}

fn decode_record(value: Value) -> FetchResult<Option<Record>> {
    if value.is_null() {
        return Ok(None);
    }
    serde_json::from_value(value)
        .map(Some)
        .map_err(|e| FetchError::decode(e.to_string()))
}
