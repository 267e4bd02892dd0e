use thiserror::Error;

/// Unified error type for the adapter.
///
/// Transport and parse failures keep their source intact and propagate to the
/// caller of the fetch function unchanged. An unsuccessful response is the
/// one normalized case: it collapses into [`Error::Server`] with no status
/// code or body detail retained, so callers needing detail must inspect the
/// raw endpoint themselves before wrapping.
#[derive(Debug, Error)]
pub enum Error {
    /// The endpoint answered, but its success flag was false.
    #[error("server error")]
    Server,

    /// HTTP transport error from an [`HttpEndpoint`](crate::HttpEndpoint) call.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Transport error reported by a non-HTTP endpoint implementation.
    #[error("endpoint error: {0}")]
    Endpoint(String),

    /// The response body could not be parsed as the expected shape.
    #[error("response parse error: {0}")]
    Serialization(#[from] serde_json::Error),
}
