//! Fetch gateway abstraction
//!
//! One asynchronous GET per call, normalized into `FetchResult<serde_json::Value>`.
//! No retry, no timeout, no caching.

mod http;

use async_trait::async_trait;

use crate::error::FetchResult;

pub use http::HttpGateway;

/// Performs one network round trip per invocation.
///
/// Implementations:
/// - `HttpGateway`: reqwest against the configured API origin
/// - test mocks with scripted responses
#[async_trait]
pub trait FetchGateway: Send + Sync {
    /// GET `path` and return the decoded JSON body.
    ///
    /// A non-ok response is an `Err`, never a raw transport exception.
    /// An empty body decodes to `Value::Null`.
    ///
    /// # Arguments
    /// * `path` - absolute API path, e.g. `/api/pets/10`
    async fn fetch(&self, path: &str) -> FetchResult<serde_json::Value>;
}
