//! List view controller

use serde::Serialize;
use serde_json::Value;

use crate::error::{FetchError, FetchResult};
use crate::route;
use crate::types::{LoadState, NavigationIntent, Record};

/// Marks one list fetch; only the latest ticket is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListTicket {
    generation: u64,
}

impl ListTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// API endpoint this ticket fetches
    pub fn path(&self) -> String {
        route::random_records_path()
    }
}

/// Renderable state of the list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSnapshot {
    pub records: Vec<Record>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Loads and holds one random batch of records
#[derive(Debug, Default)]
pub struct ListController {
    state: LoadState<Vec<Record>>,
    /// Records kept visible while a refresh is pending
    stale: Vec<Record>,
    generation: u64,
}

impl ListController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `Pending` and issue a new request, superseding any outstanding one
    pub fn begin_load(&mut self) -> ListTicket {
        self.generation += 1;

        match std::mem::replace(&mut self.state, LoadState::Pending) {
            LoadState::Ready(records) => self.stale = records,
            LoadState::Failed(_) => self.stale.clear(),
            LoadState::Idle | LoadState::Pending => {}
        }

        log::debug!("List load issued (generation {})", self.generation);
        ListTicket {
            generation: self.generation,
        }
    }

    /// User-triggered reload
    pub fn refresh(&mut self) -> ListTicket {
        self.begin_load()
    }

    /// Apply a fetch outcome. Returns `false` if the ticket was superseded.
    pub fn apply(&mut self, ticket: ListTicket, result: FetchResult<Value>) -> bool {
        if ticket.generation != self.generation || !self.state.is_pending() {
            log::debug!(
                "Discarding stale list response (generation {}, current {})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.stale.clear();
        self.state = match result.and_then(decode_records) {
            Ok(records) => {
                log::debug!("List loaded: {} records", records.len());
                LoadState::Ready(records)
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("List load failed: {e}");
                } else {
                    log::error!("List load failed: {e}");
                }
                LoadState::Failed(format!("Failed to fetch pets: {e}"))
            }
        };
        true
    }

    /// Navigation intent for opening a record. Does not touch this controller's state.
    #[allow(clippy::unused_self)]
    pub fn select_record(&self, id: i64) -> NavigationIntent {
        NavigationIntent::ShowRecord(id.to_string())
    }

    pub fn state(&self) -> &LoadState<Vec<Record>> {
        &self.state
    }

    /// Records to display: the loaded batch, or the stale batch during a refresh
    pub fn records(&self) -> &[Record] {
        match &self.state {
            LoadState::Ready(records) => records,
            LoadState::Pending => &self.stale,
            LoadState::Idle | LoadState::Failed(_) => &[],
        }
    }

    pub fn has_records(&self) -> bool {
        !self.records().is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_pending()
    }

    pub fn error(&self) -> Option<&str> {
        self.state.error()
    }

    pub fn snapshot(&self) -> ListSnapshot {
        ListSnapshot {
            records: self.records().to_vec(),
            is_loading: self.is_loading(),
            error: self.error().map(str::to_string),
        }
    }
}

/// A `null` batch is treated as empty
fn decode_records(value: Value) -> FetchResult<Vec<Record>> {
    if value.is_null() {
        return Ok(Vec::new());
    }
    serde_json::from_value(value).map_err(|e| FetchError::decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buddy_and_max, record};
    use serde_json::json;

    #[test]
    fn starts_idle() {
        let list = ListController::new();
        assert!(list.state().is_idle());
        assert!(!list.is_loading());
        assert!(list.records().is_empty());
    }

    #[test]
    fn load_success_becomes_ready() {
        let mut list = ListController::new();
        let ticket = list.begin_load();
        assert!(list.is_loading());
        assert_eq!(ticket.path(), "/api/pets/random/10");

        assert!(list.apply(ticket, Ok(buddy_and_max())));

        let snapshot = list.snapshot();
        assert_eq!(snapshot.records.len(), 2);
        assert_eq!(snapshot.records[0].name, "Buddy");
        assert!(!snapshot.is_loading);
        assert_eq!(snapshot.error, None);
    }

    #[test]
    fn empty_batch_is_ready_not_error() {
        let mut list = ListController::new();
        let ticket = list.begin_load();
        list.apply(ticket, Ok(json!([])));

        assert_eq!(list.state(), &LoadState::Ready(Vec::new()));
        assert_eq!(list.error(), None);
        assert!(!list.has_records());
    }

    #[test]
    fn null_batch_is_empty() {
        let mut list = ListController::new();
        let ticket = list.begin_load();
        list.apply(ticket, Ok(Value::Null));

        assert_eq!(list.state(), &LoadState::Ready(Vec::new()));
    }

    #[test]
    fn gateway_error_surfaces_message() {
        let mut list = ListController::new();
        let ticket = list.begin_load();
        list.apply(ticket, Err(FetchError::status(404, "Not Found")));

        assert_eq!(list.error(), Some("Failed to fetch pets: Not Found"));
        assert!(!list.is_loading());
    }

    #[test]
    fn malformed_batch_fails() {
        let mut list = ListController::new();
        let ticket = list.begin_load();
        list.apply(ticket, Ok(json!({ "unexpected": true })));

        let error = list.error().unwrap();
        assert!(error.starts_with("Failed to fetch pets: Invalid response"));
    }

    #[test]
    fn refresh_keeps_stale_records_while_pending() {
        let mut list = ListController::new();
        let ticket = list.begin_load();
        list.apply(ticket, Ok(buddy_and_max()));

        let _ = list.refresh();

        assert!(list.is_loading());
        assert_eq!(list.records().len(), 2);
        assert_eq!(list.snapshot().error, None);
    }

    #[test]
    fn refresh_after_failure_clears_error() {
        let mut list = ListController::new();
        let ticket = list.begin_load();
        list.apply(ticket, Err(FetchError::network("refused")));

        let ticket = list.refresh();
        assert_eq!(list.error(), None);
        assert!(list.records().is_empty());

        list.apply(ticket, Ok(json!([record(3, "Rex")])));
        assert_eq!(list.records()[0].name, "Rex");
    }

    #[test]
    fn superseded_response_is_discarded() {
        let mut list = ListController::new();
        let first = list.begin_load();
        let second = list.refresh();

        assert_eq!(first.generation(), 1);
        assert_eq!(second.generation(), 2);
        assert!(list.apply(second, Ok(json!([record(2, "Max")]))));
        assert!(!list.apply(first, Ok(json!([record(1, "Buddy")]))));

        assert_eq!(list.records().len(), 1);
        assert_eq!(list.records()[0].name, "Max");
    }

    #[test]
    fn duplicate_outcome_is_ignored() {
        let mut list = ListController::new();
        let ticket = list.begin_load();

        assert!(list.apply(ticket, Ok(buddy_and_max())));
        assert!(!list.apply(ticket, Err(FetchError::network("late"))));
        assert_eq!(list.error(), None);
    }

    #[test]
    fn select_record_emits_intent_only() {
        let mut list = ListController::new();
        let ticket = list.begin_load();
        list.apply(ticket, Ok(buddy_and_max()));
        let before = list.snapshot();

        let intent = list.select_record(7);

        assert_eq!(intent, NavigationIntent::ShowRecord("7".to_string()));
        assert_eq!(list.snapshot(), before);
    }

    #[test]
    fn snapshot_serializes_camel_case() {
        let list = ListController::new();
        let json = serde_json::to_value(list.snapshot()).unwrap();
        assert_eq!(json["isLoading"], false);
        assert!(json["error"].is_null());
    }
}
