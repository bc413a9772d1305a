//! Fetch strategy implementations.

mod http;
mod mock;

#[cfg(feature = "browser")]
mod browser;

pub use http::HttpFetcher;
pub use mock::MockFetcher;

#[cfg(feature = "browser")]
pub use browser::BrowserFetcher;
