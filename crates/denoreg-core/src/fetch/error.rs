//! Upstream fetch error type.

use thiserror::Error;

/// Error returned by an upstream GET. A non-2xx upstream status is not an
/// error: it is relayed to the client like any other response.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (bad URL, timeout, connection, TLS, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// The inbound request went away and the transfer was stopped.
    #[error("upstream fetch aborted")]
    Aborted,
    /// The blocking transfer task panicked or was cancelled.
    #[error("upstream fetch task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
    /// The upstream body exceeded the configured size limit.
    #[error("upstream body larger than {0} bytes")]
    TooLarge(u64),
    /// Transfer finished without a usable HTTP response.
    #[error("invalid upstream response: {0}")]
    InvalidResponse(String),
}
