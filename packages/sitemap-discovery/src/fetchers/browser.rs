//! Rendered-browser fetch strategy via an external rendering API.
//!
//! Some dealer platforms only emit their sitemap markup to a
//! JavaScript-executing client, or sit behind anti-bot checks a plain
//! HTTP client trips. This strategy delegates rendering to a
//! Browserless-style service: `POST /content` with the target URL, get
//! the rendered document back. The service owns the actual browser; this
//! crate only speaks HTTP to it.
//!
//! Requires the `browser` feature to be enabled.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::error::{FetchError, FetchResult};
use crate::traits::fetcher::{Fetcher, RawContent};

const DEFAULT_RENDER_API_URL: &str = "https://chrome.browserless.io";

#[derive(Serialize)]
struct ContentRequest<'a> {
    url: &'a str,
}

/// Fetches sitemaps through a headless-browser rendering service.
///
/// # Example
///
/// ```rust,ignore
/// let token = std::env::var("RENDER_API_TOKEN").unwrap();
/// let fetcher = BrowserFetcher::new(token)?;
/// let result = discover(sitemap_url, &fetcher, DiscoverOptions::default()).await;
/// ```
pub struct BrowserFetcher {
    client: Client,
    api_url: String,
    token: String,
}

impl BrowserFetcher {
    /// Create a new browser fetcher against the default rendering service.
    ///
    /// Rendering a JS-heavy page takes far longer than a plain HTTP
    /// fetch, so the client timeout is generous.
    pub fn new(token: impl Into<String>) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| FetchError::Http(Box::new(e)))?;

        Ok(Self {
            client,
            api_url: DEFAULT_RENDER_API_URL.to_string(),
            token: token.into(),
        })
    }

    /// Point at a self-hosted rendering service instead of the default.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl Fetcher for BrowserFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<RawContent> {
        let endpoint = format!("{}/content?token={}", self.api_url, self.token);

        let response = self
            .client
            .post(&endpoint)
            .json(&ContentRequest { url })
            .send()
            .await
            .map_err(|e| {
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
            return Err(FetchError::RenderApi(format!(
                "rendering {} failed with status {}",
                url, status
            )));
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Http(Box::new(e)))?;

        let mut raw = RawContent::new(url, body).with_status(status.as_u16());
        if let Some(ct) = content_type {
            raw = raw.with_content_type(ct);
        }
        Ok(raw)
    }

    fn name(&self) -> &str {
        "browser"
    }
}
