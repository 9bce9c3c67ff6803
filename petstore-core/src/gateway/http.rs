//! reqwest-backed gateway

use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use url::Url;

use super::FetchGateway;
use crate::config::ClientConfig;
use crate::error::{ConfigError, FetchError, FetchResult};

/// Maximum number of body characters written to debug logs
const LOG_BODY_LIMIT: usize = 512;

/// HTTP gateway against the pet store API
pub struct HttpGateway {
    client: Client,
    base_url: Url,
}

impl HttpGateway {
    /// Build a gateway from configuration
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let base_url = config.parsed_base_url()?;
        let client = Client::builder()
            .user_agent(concat!("petstore-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn resolve(&self, path: &str) -> FetchResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| FetchError::network(format!("Invalid request path '{path}': {e}")))
    }
}

#[async_trait]
impl FetchGateway for HttpGateway {
    async fn fetch(&self, path: &str) -> FetchResult<Value> {
        let url = self.resolve(path)?;
        log::debug!("GET {url}");

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FetchError::network(e.to_string()))?;

        let status = response.status();
        log::debug!("GET {url} -> {}", status.as_u16());

        if !status.is_success() {
            let reason = response
                .extensions()
                .get::<ReasonPhrase>()
                .map(|phrase| String::from_utf8_lossy(phrase.as_bytes()).into_owned());
            return Err(status_error(status, reason));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::network(format!("Failed to read response body: {e}")))?;

        log::debug!("Response Body: {}", truncate_for_log(&body));
        parse_body(&body)
    }
}

/// Translate a non-ok status into a `FetchError` carrying its status text.
///
/// `reason` is the phrase the server sent when it differs from the canonical
/// one; otherwise the canonical phrase is used.
fn status_error(status: StatusCode, reason: Option<String>) -> FetchError {
    let text = reason.filter(|r| !r.is_empty()).unwrap_or_else(|| {
        status
            .canonical_reason()
            .map_or_else(|| format!("HTTP {}", status.as_u16()), str::to_string)
    });
    FetchError::status(status.as_u16(), text)
}

/// Decode a response body. An empty body is `null`.
fn parse_body(body: &str) -> FetchResult<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| {
        log::error!("JSON parse failed: {e}");
        log::error!("Raw response: {}", truncate_for_log(body));
        FetchError::decode(e.to_string())
    })
}

fn truncate_for_log(text: &str) -> String {
    match text.char_indices().nth(LOG_BODY_LIMIT) {
        Some((idx, _)) => format!("{}... ({} bytes total)", &text[..idx], text.len()),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_uses_reason_phrase() {
        let e = status_error(StatusCode::NOT_FOUND, None);
        assert_eq!(e, FetchError::status(404, "Not Found"));
        assert_eq!(e.to_string(), "Not Found");
    }

    #[test]
    fn status_error_without_reason_phrase() {
        let status = StatusCode::from_u16(599).unwrap();
        assert_eq!(status_error(status, None).to_string(), "HTTP 599");
    }

    #[test]
    fn status_error_prefers_sent_reason() {
        let e = status_error(StatusCode::NOT_FOUND, Some("Pet Gone".to_string()));
        assert_eq!(e, FetchError::status(404, "Pet Gone"));
    }

    #[test]
    fn parse_body_empty_is_null() {
        assert_eq!(parse_body("").unwrap(), Value::Null);
        assert_eq!(parse_body("  \n").unwrap(), Value::Null);
    }

    #[test]
    fn parse_body_json() {
        let value = parse_body(r#"[{"id":1}]"#).unwrap();
        assert_eq!(value[0]["id"], 1);
    }

    #[test]
    fn parse_body_invalid() {
        let result = parse_body("<html>");
        assert!(matches!(result, Err(FetchError::Decode { .. })));
    }

    #[test]
    fn new_rejects_bad_base_url() {
        let result = HttpGateway::new(&ClientConfig::new("not a url"));
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn resolve_joins_absolute_paths_onto_origin() {
        let gateway = HttpGateway::new(&ClientConfig::new("http://localhost:8080/app/")).unwrap();
        let url = gateway.resolve("/api/pets/random/10").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/pets/random/10");
    }

    #[test]
    fn truncate_long_bodies() {
        let body = "x".repeat(LOG_BODY_LIMIT + 10);
        let logged = truncate_for_log(&body);
        assert!(logged.ends_with(&format!("... ({} bytes total)", body.len())));
    }
}
