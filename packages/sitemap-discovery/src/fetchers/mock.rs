//! Mock fetcher for testing.
//!
//! Canned pages and canned failures keyed by URL, with per-URL call
//! counting so tests can assert the no-duplicate-fetch invariant.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{FetchError, FetchResult};
use crate::traits::fetcher::{Fetcher, RawContent};

/// Mock fetch strategy backed by in-memory canned responses.
///
/// # Example
///
/// ```rust
/// use sitemap_discovery::fetchers::MockFetcher;
///
/// let mock = MockFetcher::new()
///     .with_page("https://d.example/sitemap.xml", "<urlset/>")
///     .with_failure("https://d.example/sitemap2.xml", "connection refused");
/// ```
#[derive(Default)]
pub struct MockFetcher {
    pages: Arc<RwLock<HashMap<String, String>>>,
    failures: Arc<RwLock<HashMap<String, String>>>,
    fetch_counts: Arc<RwLock<HashMap<String, usize>>>,
}

impl MockFetcher {
    /// Create an empty mock fetcher. Fetching any URL fails until pages
    /// are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a canned page (builder form).
    pub fn with_page(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.add_page(url, body);
        self
    }

    /// Add a canned failure (builder form).
    pub fn with_failure(self, url: impl Into<String>, error: impl Into<String>) -> Self {
        self.add_failure(url, error);
        self
    }

    /// Add a canned page.
    pub fn add_page(&self, url: impl Into<String>, body: impl Into<String>) {
        self.pages.write().unwrap().insert(url.into(), body.into());
    }

    /// Add a canned failure.
    pub fn add_failure(&self, url: impl Into<String>, error: impl Into<String>) {
        self.failures
            .write()
            .unwrap()
            .insert(url.into(), error.into());
    }

    /// How many times `url` was fetched.
    pub fn fetch_count(&self, url: &str) -> usize {
        self.fetch_counts
            .read()
            .unwrap()
            .get(url)
            .copied()
            .unwrap_or(0)
    }

    /// Total fetches across all URLs.
    pub fn total_fetches(&self) -> usize {
        self.fetch_counts.read().unwrap().values().sum()
    }

    /// Maximum fetch count over all URLs seen (1 in a correct traversal).
    pub fn max_fetch_count(&self) -> usize {
        self.fetch_counts
            .read()
            .unwrap()
            .values()
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// Every URL that was fetched at least once.
    pub fn fetched_urls(&self) -> Vec<String> {
        self.fetch_counts.read().unwrap().keys().cloned().collect()
    }
}

impl Clone for MockFetcher {
    fn clone(&self) -> Self {
        Self {
            pages: Arc::clone(&self.pages),
            failures: Arc::clone(&self.failures),
            fetch_counts: Arc::clone(&self.fetch_counts),
        }
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<RawContent> {
        *self
            .fetch_counts
            .write()
            .unwrap()
            .entry(url.to_string())
            .or_insert(0) += 1;

        if let Some(error) = self.failures.read().unwrap().get(url) {
            return Err(FetchError::Http(error.clone().into()));
        }

        match self.pages.read().unwrap().get(url) {
            Some(body) => Ok(RawContent::new(url, body.clone()).with_status(200)),
            None => Err(FetchError::Status {
                url: url.to_string(),
                status: 404,
            }),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
