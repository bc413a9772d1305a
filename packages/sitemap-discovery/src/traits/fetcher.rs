//! Fetcher trait for pluggable sitemap retrieval.
//!
//! Some dealer platforms serve sitemaps to any HTTP client; others only
//! to a JavaScript-executing browser, or behind anti-bot checks. The
//! traversal engine is agnostic to which is needed: it depends on this
//! trait alone, and the caller picks the strategy once at the call
//! boundary.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sitemap_discovery::{discover, DiscoverOptions, HttpFetcher};
//!
//! let fetcher = HttpFetcher::new();
//! let result = discover("https://d.example/sitemap.xml", &fetcher, DiscoverOptions::default()).await;
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FetchResult;

/// Raw content fetched for a single URL, before classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawContent {
    /// URL the fetch was issued for
    pub url: String,

    /// Response body as text
    pub body: String,

    /// MIME type from the response, if the strategy surfaces one
    pub content_type: Option<String>,

    /// HTTP status code, if the strategy surfaces one
    pub status: Option<u16>,

    /// When the content was fetched
    pub fetched_at: DateTime<Utc>,
}

impl RawContent {
    /// Create raw content with minimal fields.
    pub fn new(url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            body: body.into(),
            content_type: None,
            status: None,
            fetched_at: Utc::now(),
        }
    }

    /// Set the content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// Set the HTTP status.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Check whether the body holds anything beyond whitespace.
    pub fn has_content(&self) -> bool {
        !self.body.trim().is_empty()
    }
}

/// Fetch strategy for sitemap URLs.
///
/// Implementations:
/// - [`HttpFetcher`](crate::fetchers::HttpFetcher): direct HTTP client
/// - [`BrowserFetcher`](crate::fetchers::BrowserFetcher): external
///   rendering API for JS-only sitemaps (feature `browser`)
/// - [`MockFetcher`](crate::fetchers::MockFetcher): canned pages for tests
///
/// Implementations own their timeout policy; the traversal engine imposes
/// no timing of its own, only the structural depth bound.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Retrieve raw content for one URL.
    async fn fetch(&self, url: &str) -> FetchResult<RawContent>;

    /// Strategy name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_content_builder() {
        let raw = RawContent::new("https://d.example/sitemap.xml", "<urlset/>")
            .with_content_type("application/xml")
            .with_status(200);

        assert_eq!(raw.url, "https://d.example/sitemap.xml");
        assert_eq!(raw.content_type.as_deref(), Some("application/xml"));
        assert_eq!(raw.status, Some(200));
        assert!(raw.has_content());
    }

    #[test]
    fn whitespace_body_has_no_content() {
        assert!(!RawContent::new("https://d.example/s.xml", "  \n ").has_content());
    }
}
