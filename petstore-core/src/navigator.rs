//! Top-level view routing
//!
//! The [`Navigator`] owns which view is active and keeps it consistent with
//! the history location. Forward navigation (selecting a record) pushes an
//! entry and switches view immediately; back/forward only move the history
//! cursor, and the view follows when the resulting `PopState` is polled.

use crate::controllers::{DetailController, ListController};
use crate::driver::{FetchOutcome, FetchRequest};
use crate::history::{BrowserHistory, HistoryEvent, HistorySubscription};
use crate::route;
use crate::types::{NavigationIntent, ViewState};

/// View router over a [`BrowserHistory`]
#[derive(Debug)]
pub struct Navigator<H: BrowserHistory> {
    history: H,
    view: ViewState,
    list: ListController,
    /// Present only while the detail view is active
    detail: Option<DetailController>,
    /// Last generation of an unmounted detail view, carried into the next mount
    detail_generation: u64,
    /// Present only while active
    subscription: Option<HistorySubscription>,
}

impl<H: BrowserHistory> Navigator<H> {
    pub fn new(history: H) -> Self {
        Self {
            history,
            view: ViewState::List,
            list: ListController::new(),
            detail: None,
            detail_generation: 0,
            subscription: None,
        }
    }

    // ========== Lifecycle ==========

    /// Start listening to history and enter the view for the current location.
    ///
    /// A detail location is entered directly without loading the list first.
    /// Activating an already active navigator is a no-op, so at most one
    /// history listener is ever registered.
    pub fn activate(&mut self) -> Vec<FetchRequest> {
        if self.subscription.is_some() {
            log::debug!("Navigator already active");
            return Vec::new();
        }

        self.subscription = Some(self.history.subscribe());
        let location = self.history.location();
        log::info!("Navigator activated at {location}");
        self.enter(route::parse_path(&location))
    }

    /// Stop listening to history. Pending outcomes for the detail view are
    /// ignored from here on.
    pub fn deactivate(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.history.unsubscribe(subscription.id());
            log::info!("Navigator deactivated");
        }
        self.unmount_detail();
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    // ========== Transitions ==========

    /// Act on an intent raised by a view
    pub fn dispatch(&mut self, intent: NavigationIntent) -> Vec<FetchRequest> {
        match intent {
            NavigationIntent::ShowRecord(record_id) => self.show_record(record_id),
            NavigationIntent::Back => {
                self.history.back();
                Vec::new()
            }
            NavigationIntent::Forward => {
                self.history.forward();
                Vec::new()
            }
        }
    }

    /// Open a record from the list view
    pub fn select_record(&mut self, id: i64) -> Vec<FetchRequest> {
        let intent = self.list.select_record(id);
        self.dispatch(intent)
    }

    /// Go back one history entry
    pub fn back(&mut self) -> Vec<FetchRequest> {
        let intent = self
            .detail
            .as_ref()
            .map_or(NavigationIntent::Back, DetailController::back);
        self.dispatch(intent)
    }

    /// Apply every history change delivered since the last poll
    pub fn poll_history(&mut self) -> Vec<FetchRequest> {
        let mut requests = Vec::new();
        while let Some(event) = self
            .subscription
            .as_mut()
            .and_then(HistorySubscription::try_next)
        {
            match event {
                HistoryEvent::PopState { path } => {
                    log::debug!("PopState {path}");
                    requests.extend(self.enter(route::parse_path(&path)));
                }
            }
        }
        requests
    }

    /// User-triggered reload of the active view
    pub fn refresh(&mut self) -> Vec<FetchRequest> {
        match &self.view {
            ViewState::List => vec![FetchRequest::List(self.list.refresh())],
            ViewState::Detail { .. } => self
                .detail
                .as_mut()
                .and_then(DetailController::refresh)
                .map(FetchRequest::Detail)
                .into_iter()
                .collect(),
        }
    }

    /// Route a completed fetch to its controller.
    ///
    /// Returns `false` if the outcome was stale or its view is gone.
    pub fn resolve(&mut self, outcome: FetchOutcome) -> bool {
        let FetchOutcome { request, result } = outcome;
        match request {
            FetchRequest::List(ticket) => self.list.apply(ticket, result),
            FetchRequest::Detail(ticket) => match self.detail.as_mut() {
                Some(detail) => detail.apply(&ticket, result),
                None => {
                    log::debug!(
                        "Discarding detail response for {}: view unmounted",
                        ticket.record_id()
                    );
                    false
                }
            },
        }
    }

    fn show_record(&mut self, record_id: String) -> Vec<FetchRequest> {
        if self.view.record_id() == Some(record_id.as_str()) {
            return Vec::new();
        }
        self.history.push(&route::detail_path(&record_id));
        self.enter(ViewState::Detail { record_id })
    }

    fn enter(&mut self, view: ViewState) -> Vec<FetchRequest> {
        let mut requests = Vec::new();

        match &view {
            ViewState::List => {
                self.unmount_detail();
                if !self.list.has_records() && !self.list.is_loading() {
                    requests.push(FetchRequest::List(self.list.begin_load()));
                }
            }
            ViewState::Detail { record_id } => match self.detail.as_mut() {
                Some(detail) => {
                    if let Some(ticket) = detail.set_record_id(record_id.as_str()) {
                        requests.push(FetchRequest::Detail(ticket));
                    }
                }
                None => {
                    let (detail, ticket) =
                        DetailController::mount_after(record_id.as_str(), self.detail_generation);
                    self.detail = Some(detail);
                    requests.push(FetchRequest::Detail(ticket));
                }
            },
        }

        if self.view != view {
            log::info!(
                "View {} -> {}",
                route::view_path(&self.view),
                route::view_path(&view)
            );
        }
        self.view = view;
        requests
    }

    fn unmount_detail(&mut self) {
        if let Some(detail) = self.detail.take() {
            self.detail_generation = detail.generation();
            log::debug!("Detail view unmounted at generation {}", self.detail_generation);
        }
    }

    // ========== Accessors ==========

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Current history location
    pub fn location(&self) -> String {
        self.history.location()
    }

    pub fn list(&self) -> &ListController {
        &self.list
    }

    /// Detail controller, mounted only while the detail view is active
    pub fn detail(&self) -> Option<&DetailController> {
        self.detail.as_ref()
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Direct history access, e.g. for browser-style back/forward buttons
    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }
}
