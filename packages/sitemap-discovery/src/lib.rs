//! Sitemap Discovery
//!
//! Breadth-first discovery of inventory page URLs from dealer-site
//! sitemaps: nested sitemap indexes are traversed, each fetched document
//! is classified by format (XML urlset, XML sitemap index, HTML, plain
//! text) and handed to the matching extractor, and everything that is not
//! another sitemap is collected as a leaf URL.
//!
//! # Design
//!
//! - Fetching is a strategy behind the [`Fetcher`] trait: a plain HTTP
//!   client for well-behaved providers, an external rendering API for
//!   JS-only sitemaps, a mock for tests. The engine never branches on
//!   which one is active.
//! - The worklist + visited-set + depth-bound loop makes traversal
//!   provably terminating, even on self-referencing or adversarially
//!   deep sitemap graphs.
//! - Per-URL failures become diagnostics in the returned
//!   [`DiscoverResult`]; the engine itself never returns an error, so one
//!   broken dealer site cannot abort a batch.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sitemap_discovery::{discover, locate_sitemaps, DiscoverOptions, HttpFetcher};
//!
//! let fetcher = HttpFetcher::new().with_user_agent("InventoryBot/1.0");
//!
//! // Either start from a known sitemap URL...
//! let result = discover("https://www.d.example/sitemap.xml", &fetcher, DiscoverOptions::default()).await;
//!
//! // ...or locate sitemaps for a site first.
//! for sitemap_url in locate_sitemaps(&fetcher, "https://www.d.example", "InventoryBot").await {
//!     let result = discover(&sitemap_url, &fetcher, DiscoverOptions::default()).await;
//!     println!("{} leaf urls", result.leaf_urls.len());
//! }
//! ```
//!
//! Downstream scrapers filter `leaf_urls` by provider-specific patterns
//! (`new/`, `used/`, `inventory/`, ...) to find vehicle detail pages; that
//! filtering is deliberately outside this crate.

pub mod classify;
pub mod discover;
pub mod error;
pub mod extract;
pub mod fetchers;
pub mod robots;
pub mod seed;
pub mod traits;

// Re-export core types at crate root
pub use classify::{classify, SitemapFormat};
pub use discover::{discover, DiscoverOptions, DiscoverResult};
pub use error::{FetchError, FetchResult};
pub use robots::RobotsTxt;
pub use seed::locate_sitemaps;
pub use traits::fetcher::{Fetcher, RawContent};

// Re-export fetch strategies
pub use fetchers::{HttpFetcher, MockFetcher};

#[cfg(feature = "browser")]
pub use fetchers::BrowserFetcher;
