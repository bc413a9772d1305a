//! Direct HTTP fetch strategy.

use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;

use crate::error::{FetchError, FetchResult};
use crate::traits::fetcher::{Fetcher, RawContent};

/// Fetches sitemaps with a plain HTTP client.
///
/// Suitable for providers that serve sitemap XML to any client. For
/// sitemaps rendered client-side or gated behind anti-bot checks, use
/// `BrowserFetcher` instead.
///
/// # Example
///
/// ```rust,ignore
/// let fetcher = HttpFetcher::new()
///     .with_user_agent("InventoryBot/1.0")
///     .with_delay_ms(250);
/// ```
pub struct HttpFetcher {
    client: reqwest::Client,
    user_agent: String,
    delay_ms: u64,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            user_agent: "SitemapDiscovery/1.0".to_string(),
            delay_ms: 0,
        }
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Replace the default 30s per-request timeout.
    pub fn with_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");
        self
    }

    /// Set a politeness delay applied before each request (milliseconds).
    pub fn with_delay_ms(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }

    fn validate_scheme(url: &str) -> FetchResult<()> {
        let parsed = Url::parse(url).map_err(|_| FetchError::InvalidUrl {
            url: url.to_string(),
        })?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            _ => Err(FetchError::InvalidUrl {
                url: url.to_string(),
            }),
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<RawContent> {
        Self::validate_scheme(url)?;

        if self.delay_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.delay_ms)).await;
        }

        debug!(url = %url, "HTTP fetch starting");
        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "HTTP request failed");
                if e.is_timeout() {
                    FetchError::Timeout {
                        url: url.to_string(),
                    }
                } else {
                    FetchError::Http(Box::new(e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Http(Box::new(e))
            }
        })?;

        debug!(url = %url, bytes = body.len(), "HTTP fetch complete");

        let mut raw = RawContent::new(url, body).with_status(status.as_u16());
        if let Some(ct) = content_type {
            raw = raw.with_content_type(ct);
        }
        Ok(raw)
    }

    fn name(&self) -> &str {
        "http"
    }
}
