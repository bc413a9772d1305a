//! Sitemap location for a dealer site.
//!
//! Batch callers usually hold a dealer's website URL, not its sitemap URL.
//! `robots.txt` is the authoritative source when the site declares one;
//! otherwise the conventional sitemap paths are probed directly.

use tracing::{debug, info};

use crate::robots::RobotsTxt;
use crate::traits::fetcher::Fetcher;

/// Conventional sitemap paths, probed in order when robots.txt declares
/// nothing. Compressed variants are omitted: every provider that serves a
/// `.xml.gz` also serves the uncompressed path, and this crate does not
/// decode gzip.
const SITEMAP_CANDIDATES: &[&str] = &[
    "sitemap.xml",
    "sitemap_index.xml",
    "sitemap-index.xml",
    "sitemap/sitemap.xml",
];

/// Find candidate sitemap URLs for a site.
///
/// Fetches `{site}/robots.txt` through the supplied strategy and returns
/// its `Sitemap:` entries when present. Otherwise probes the conventional
/// paths, skipping any the robots rules disallow for `user_agent`, and
/// returns those that respond with content. The list may be empty; each
/// entry is a starting point for [`discover`](crate::discover::discover).
pub async fn locate_sitemaps(
    fetcher: &dyn Fetcher,
    site_url: &str,
    user_agent: &str,
) -> Vec<String> {
    let base = site_url.trim_end_matches('/');

    let robots_url = format!("{}/robots.txt", base);
    let robots = match fetcher.fetch(&robots_url).await {
        Ok(raw) if raw.has_content() => RobotsTxt::parse(&raw.body, user_agent),
        Ok(_) => RobotsTxt::default(),
        Err(e) => {
            debug!(url = %robots_url, error = %e, "no robots.txt, probing conventional paths");
            RobotsTxt::default()
        }
    };

    let declared = robots.sitemaps();
    if !declared.is_empty() {
        info!(site = %base, count = declared.len(), "robots.txt declares sitemaps");
        return declared.to_vec();
    }

    let mut found = Vec::new();
    for candidate in SITEMAP_CANDIDATES {
        let path = format!("/{}", candidate);
        if !robots.is_allowed(&path) {
            debug!(site = %base, path = %path, "candidate disallowed by robots.txt");
            continue;
        }

        let url = format!("{}/{}", base, candidate);
        match fetcher.fetch(&url).await {
            Ok(raw) if raw.has_content() => {
                debug!(url = %url, "sitemap candidate responded");
                found.push(url);
            }
            _ => {}
        }
    }

    info!(site = %base, count = found.len(), "sitemap location finished");
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetchers::MockFetcher;

    const SITE: &str = "https://www.d.example";

    #[tokio::test]
    async fn robots_declared_sitemaps_win() {
        let mock = MockFetcher::new().with_page(
            "https://www.d.example/robots.txt",
            "User-agent: *\nSitemap: https://www.d.example/custom-map.xml\n",
        );

        let found = locate_sitemaps(&mock, SITE, "InventoryBot").await;

        assert_eq!(found, vec!["https://www.d.example/custom-map.xml"]);
        // Declared sitemaps are returned without probing conventional paths
        assert_eq!(mock.total_fetches(), 1);
    }

    #[tokio::test]
    async fn falls_back_to_conventional_paths() {
        let mock = MockFetcher::new()
            .with_page("https://www.d.example/sitemap_index.xml", "<sitemapindex/>");

        let found = locate_sitemaps(&mock, "https://www.d.example/", "InventoryBot").await;

        assert_eq!(found, vec!["https://www.d.example/sitemap_index.xml"]);
    }

    #[tokio::test]
    async fn robots_disallow_skips_candidates() {
        let mock = MockFetcher::new()
            .with_page("https://www.d.example/robots.txt", "User-agent: *\nDisallow: /\n")
            .with_page("https://www.d.example/sitemap.xml", "<urlset/>");

        let found = locate_sitemaps(&mock, SITE, "InventoryBot").await;

        assert!(found.is_empty());
        assert_eq!(mock.fetch_count("https://www.d.example/sitemap.xml"), 0);
    }

    #[tokio::test]
    async fn nothing_found_returns_empty() {
        let mock = MockFetcher::new();
        let found = locate_sitemaps(&mock, SITE, "InventoryBot").await;
        assert!(found.is_empty());
    }
}
