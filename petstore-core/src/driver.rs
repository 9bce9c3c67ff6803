//! Fetch execution
//!
//! State transitions hand out [`FetchRequest`]s; a host runtime executes them
//! through a [`FetchGateway`] and returns each [`FetchOutcome`] to
//! [`Navigator::resolve`]. The request carries the ticket it was issued
//! under, so outcomes can arrive in any order.

use futures::future::join_all;
use serde_json::Value;

use crate::controllers::{DetailTicket, ListTicket};
use crate::error::FetchResult;
use crate::gateway::FetchGateway;
use crate::history::BrowserHistory;
use crate::navigator::Navigator;

/// A fetch some controller is waiting for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Random batch for the list view
    List(ListTicket),
    /// One record for the detail view
    Detail(DetailTicket),
}

impl FetchRequest {
    /// API endpoint to GET
    pub fn path(&self) -> String {
        match self {
            Self::List(ticket) => ticket.path(),
            Self::Detail(ticket) => ticket.path(),
        }
    }
}

/// A completed fetch, ready to be applied
#[derive(Debug)]
pub struct FetchOutcome {
    pub request: FetchRequest,
    pub result: FetchResult<Value>,
}

/// Perform exactly one gateway call for `request`
pub async fn execute(gateway: &dyn FetchGateway, request: FetchRequest) -> FetchOutcome {
    let result = gateway.fetch(&request.path()).await;
    FetchOutcome { request, result }
}

/// Perform all requests concurrently
pub async fn execute_all(
    gateway: &dyn FetchGateway,
    requests: Vec<FetchRequest>,
) -> Vec<FetchOutcome> {
    join_all(
        requests
            .into_iter()
            .map(|request| execute(gateway, request)),
    )
    .await
}

/// Execute `requests` and apply every outcome to `navigator`
pub async fn settle<H: BrowserHistory>(
    navigator: &mut Navigator<H>,
    gateway: &dyn FetchGateway,
    requests: Vec<FetchRequest>,
) {
    for outcome in execute_all(gateway, requests).await {
        navigator.resolve(outcome);
    }
}
