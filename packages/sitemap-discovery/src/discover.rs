//! Breadth-first sitemap traversal.
//!
//! The engine drives a FIFO worklist over sitemap URLs: fetch, classify,
//! extract, then partition each extracted URL into "another sitemap to
//! traverse" or "a leaf page to collect". A visited set bounds fetches to
//! one per distinct URL and a depth limit bounds adversarial or cyclic
//! sitemap graphs, so traversal always terminates.
//!
//! Per-URL failures never abort the run. The engine returns a fully
//! populated [`DiscoverResult`] in every case: a caller scanning hundreds
//! of dealer sites in a batch must not lose the batch to one malformed
//! sitemap.

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::classify::{classify, SitemapFormat};
use crate::extract::extract;
use crate::traits::fetcher::Fetcher;

/// Options for one traversal run.
#[derive(Debug, Clone)]
pub struct DiscoverOptions {
    max_depth: usize,
    visited: HashSet<String>,
    cancel: Option<CancellationToken>,
}

impl Default for DiscoverOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl DiscoverOptions {
    /// Nesting depth beyond which sitemap references are skipped unfetched.
    pub const DEFAULT_MAX_DEPTH: usize = 10;

    /// Create options with the default depth limit.
    pub fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            visited: HashSet::new(),
            cancel: None,
        }
    }

    /// Set the maximum nesting depth (root is depth 0).
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Seed the visited set, e.g. from an earlier incremental run.
    /// Seeded URLs are skipped exactly like in-run revisits.
    pub fn with_visited(mut self, visited: HashSet<String>) -> Self {
        self.visited = visited;
        self
    }

    /// Attach a cancellation token, checked before each worklist entry.
    /// On cancellation the partial result accumulated so far is returned.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }
}

/// Outcome of one traversal run.
///
/// `leaf_urls` preserves discovery order and is not deduplicated: the same
/// page listed by two sitemaps appears twice, and downstream filters see
/// exactly what the sitemaps declared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverResult {
    /// True once any sitemap in the run was fetched successfully (sticky).
    pub accessible: bool,

    /// Human-readable diagnostics: fetch failures, skips, truncations.
    pub messages: Vec<String>,

    /// Discovered non-sitemap URLs, in discovery order.
    pub leaf_urls: Vec<String>,

    /// Classification of the first successfully fetched document.
    pub root_format: SitemapFormat,
}

impl DiscoverResult {
    fn empty() -> Self {
        Self {
            accessible: false,
            messages: Vec::new(),
            leaf_urls: Vec::new(),
            root_format: SitemapFormat::Unknown,
        }
    }
}

/// Whether an extracted URL refers to another sitemap rather than a leaf
/// page.
fn is_sitemap_ref(url: &str) -> bool {
    url.ends_with(".xml") || url.to_ascii_lowercase().contains("sitemap")
}

/// Traverse a sitemap tree breadth-first, collecting leaf URLs.
///
/// Pulls URLs off a FIFO worklist starting at `root_url`, fetching each at
/// most once through `fetcher` and following nested sitemap references up
/// to the configured depth. Always returns a result; inspect
/// `result.messages` for anything that went wrong along the way.
pub async fn discover(
    root_url: &str,
    fetcher: &dyn Fetcher,
    options: DiscoverOptions,
) -> DiscoverResult {
    let DiscoverOptions {
        max_depth,
        mut visited,
        cancel,
    } = options;

    let mut result = DiscoverResult::empty();
    let mut root_classified = false;

    let mut worklist: VecDeque<(String, usize)> = VecDeque::new();
    worklist.push_back((root_url.to_string(), 0));

    info!(root = %root_url, max_depth, strategy = fetcher.name(), "sitemap traversal starting");

    while let Some((url, depth)) = worklist.pop_front() {
        if cancel.as_ref().is_some_and(|c| c.is_cancelled()) {
            warn!(root = %root_url, "traversal cancelled");
            result
                .messages
                .push("traversal cancelled before the worklist drained".to_string());
            break;
        }

        if visited.contains(&url) {
            debug!(url = %url, "already visited, skipping");
            result
                .messages
                .push(format!("already visited sitemap {}, skipping", url));
            continue;
        }

        if depth > max_depth {
            warn!(url = %url, depth, "maximum nesting depth reached");
            result.messages.push(format!(
                "maximum sitemap nesting depth reached at {}, skipping",
                url
            ));
            continue;
        }

        visited.insert(url.clone());

        let raw = match fetcher.fetch(&url).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(url = %url, error = %e, "sitemap fetch failed");
                result
                    .messages
                    .push(format!("failed to fetch sitemap {}: {}", url, e));
                continue;
            }
        };

        if !raw.has_content() {
            warn!(url = %url, "sitemap fetch returned an empty body");
            result
                .messages
                .push(format!("empty response body for sitemap {}", url));
            continue;
        }

        result.accessible = true;

        let format = classify(&raw.body);
        if !root_classified {
            result.root_format = format;
            root_classified = true;
        }
        debug!(url = %url, ?format, depth, "sitemap classified");

        if format == SitemapFormat::Unknown {
            result
                .messages
                .push(format!("unrecognized sitemap format for {}", url));
            continue;
        }

        for child in extract(format, &raw.body) {
            if is_sitemap_ref(&child) {
                worklist.push_back((child, depth + 1));
            } else {
                result.leaf_urls.push(child);
            }
        }
    }

    info!(
        root = %root_url,
        leaf_urls = result.leaf_urls.len(),
        accessible = result.accessible,
        "sitemap traversal finished"
    );

    result
}
