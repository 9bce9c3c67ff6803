//! Unified error type definition

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of a single gateway round trip.
///
/// Callers never need to tell a transport failure apart from a non-ok
/// response: both carry a human-readable message through `Display`, which is
/// what the controllers surface in their `Failed` state.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum FetchError {
    /// The server answered with a non-ok status.
    ///
    /// `Display` is the status text alone (e.g. `Not Found`).
    #[error("{status_text}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Reason phrase of the response status.
        status_text: String,
    },

    /// The request never produced a response (connection refused, DNS failure, ...).
    #[error("Network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The response body could not be decoded.
    #[error("Invalid response: {detail}")]
    Decode {
        /// Details about the decode failure.
        detail: String,
    },
}

impl FetchError {
    /// Build a status error from a code and its reason phrase.
    pub fn status(status: u16, status_text: impl Into<String>) -> Self {
        Self::Status {
            status,
            status_text: status_text.into(),
        }
    }

    pub fn network(detail: impl Into<String>) -> Self {
        Self::Network {
            detail: detail.into(),
        }
    }

    pub fn decode(detail: impl Into<String>) -> Self {
        Self::Decode {
            detail: detail.into(),
        }
    }

    /// Whether the failure is an ordinary server answer rather than a fault.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

/// Gateway result alias
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The API base URL is not an absolute http(s) URL
    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    /// Configuration file could not be read
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid JSON
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_status_is_status_text() {
        let e = FetchError::status(404, "Not Found");
        assert_eq!(e.to_string(), "Not Found");
    }

    #[test]
    fn display_network_error() {
        let e = FetchError::network("connection refused");
        assert_eq!(e.to_string(), "Network error: connection refused");
    }

    #[test]
    fn display_decode_error() {
        let e = FetchError::decode("expected value at line 1 column 1");
        assert_eq!(
            e.to_string(),
            "Invalid response: expected value at line 1 column 1"
        );
    }

    #[test]
    fn only_status_errors_are_expected() {
        assert!(FetchError::status(500, "Internal Server Error").is_expected());
        assert!(!FetchError::network("reset").is_expected());
        assert!(!FetchError::decode("eof").is_expected());
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = FetchError::status(503, "Service Unavailable");
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"Status\""));
        assert!(json.contains("\"status\":503"));
    }

    #[test]
    fn invalid_base_url_message() {
        let e = ConfigError::InvalidBaseUrl {
            url: "ftp://x".to_string(),
            reason: "unsupported scheme".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Invalid base URL 'ftp://x': unsupported scheme"
        );
    }
}
