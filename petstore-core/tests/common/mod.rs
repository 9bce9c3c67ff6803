//! Shared test helpers: scripted gateway and record fixtures

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use petstore_core::{
    settle, FetchError, FetchGateway, FetchResult, MemoryHistory, Navigator,
};
use serde_json::{json, Value};
use tokio::sync::RwLock;

/// Gateway answering from per-path queues and recording every call
#[derive(Default)]
pub struct MockGateway {
    responses: RwLock<HashMap<String, VecDeque<FetchResult<Value>>>>,
    calls: RwLock<Vec<String>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for `path`; responses are consumed in order
    pub async fn respond(&self, path: &str, result: FetchResult<Value>) {
        self.responses
            .write()
            .await
            .entry(path.to_string())
            .or_default()
            .push_back(result);
    }

    pub async fn calls(&self) -> Vec<String> {
        self.calls.read().await.clone()
    }

    pub async fn call_count(&self, path: &str) -> usize {
        self.calls.read().await.iter().filter(|p| *p == path).count()
    }
}

#[async_trait]
impl FetchGateway for MockGateway {
    async fn fetch(&self, path: &str) -> FetchResult<Value> {
        self.calls.write().await.push(path.to_string());
        self.responses
            .write()
            .await
            .get_mut(path)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Err(FetchError::network(format!("no response scripted for {path}"))))
    }
}

/// Activate a navigator at `path` and settle its startup fetches
pub async fn start_at(path: &str, gateway: &MockGateway) -> Navigator<MemoryHistory> {
    let mut navigator = Navigator::new(MemoryHistory::new(path));
    let requests = navigator.activate();
    settle(&mut navigator, gateway, requests).await;
    navigator
}

pub fn buddy_and_max() -> Value {
    json!([
        { "id": 1, "name": "Buddy", "photoUrls": [] },
        { "id": 2, "name": "Max", "photoUrls": [] }
    ])
}

pub fn cooper() -> Value {
    json!({
        "id": 10,
        "name": "Cooper",
        "category": { "id": 26, "name": "Dog" },
        "photoUrls": ["/images/Dog.jpg"],
        "tags": [{ "id": 60, "name": "Neutered" }],
        "status": "available"
    })
}
