//! Fetch service
//!
//! Runs each [`FetchRequest`] on its own task and posts the outcome back to
//! the main loop, which stays free to handle input while fetches are
//! outstanding.

use std::sync::Arc;

use petstore_core::{execute, FetchGateway, FetchOutcome, FetchRequest};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

pub struct FetchService {
    gateway: Arc<dyn FetchGateway>,
    sender: UnboundedSender<FetchOutcome>,
}

impl FetchService {
    /// Create the service and the receiver its outcomes arrive on
    pub fn new(gateway: Arc<dyn FetchGateway>) -> (Self, UnboundedReceiver<FetchOutcome>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { gateway, sender }, receiver)
    }

    /// Start every request without waiting for any of them
    pub fn spawn(&self, requests: Vec<FetchRequest>) {
        for request in requests {
            let gateway = Arc::clone(&self.gateway);
            let sender = self.sender.clone();
            tokio::spawn(async move {
                let outcome = execute(gateway.as_ref(), request).await;
                if sender.send(outcome).is_err() {
                    log::debug!("Fetch finished after the UI loop exited");
                }
            });
        }
    }
}
