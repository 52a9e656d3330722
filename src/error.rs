use std::time::Duration;

use thiserror::Error;

/// Failures surfaced by the aggregators.
///
/// Per-item failures inside a fan-out never reach the caller as a
/// `FetchError`; they only shrink the result set.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("network failure requesting {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("timed out after {}s", .0.as_secs_f32())]
    Timeout(Duration),

    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl FetchError {
    /// Re-labels a non-success HTTP status as a missing resource.
    pub(crate) fn or_not_found(self, what: impl FnOnce() -> String) -> Self {
        match self {
            FetchError::Status { .. } => FetchError::NotFound(what()),
            other => other,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Timeout(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound(_))
    }
}
