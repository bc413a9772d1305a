//! Typed errors for the sitemap-discovery library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.
//!
//! Only fetch strategies produce errors. The traversal engine never does:
//! every per-URL failure becomes a diagnostic message inside the returned
//! [`DiscoverResult`](crate::DiscoverResult) so that one bad sitemap never
//! aborts a batch.

use thiserror::Error;

/// Errors that can occur while fetching a single sitemap URL.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connection, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Non-success HTTP status
    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    /// URL is not an absolute http/https URL
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// Request exceeded the fetcher's timeout
    #[error("timeout fetching {url}")]
    Timeout { url: String },

    /// The external rendering service rejected or failed the request
    #[error("render API error: {0}")]
    RenderApi(String),
}

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
