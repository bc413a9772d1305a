//! Sitemap content classification.
//!
//! Dealer sites serve "sitemaps" in wildly different shapes: well-formed
//! XML urlsets, nested sitemap indexes, half-rendered HTML shells, and
//! plain lists of URLs one per line. Classification is token-based and
//! ordered by specificity rather than attempting a strict XML parse,
//! because a strict parse on the malformed documents seen in the wild
//! would fail where a tolerant scan still extracts every URL.

use serde::{Deserialize, Serialize};
use url::Url;

/// Format tag for one fetched sitemap document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SitemapFormat {
    /// XML document with a `urlset` root
    XmlUrlset,
    /// XML sitemap index pointing at further sitemaps
    XmlSitemapIndex,
    /// HTML page (anchor links are the URL source)
    Html,
    /// Plain text, one URL per line
    PlainText,
    /// None of the known formats
    Unknown,
}

impl SitemapFormat {
    /// Whether this format is one of the two XML variants.
    pub fn is_xml(self) -> bool {
        matches!(self, Self::XmlUrlset | Self::XmlSitemapIndex)
    }
}

/// Classify raw sitemap content.
///
/// Pure and total: no I/O, never panics, always returns one of the five
/// tags. Checks are first-match-wins, most specific first: the `urlset`
/// token check runs before anything XML-shaped so that documents with a
/// missing prolog or broken namespace still classify correctly.
pub fn classify(content: &str) -> SitemapFormat {
    if content.contains("urlset") {
        return SitemapFormat::XmlUrlset;
    }

    let trimmed = content.trim_start();
    if trimmed.starts_with("<?xml") && content.contains("sitemapindex") {
        return SitemapFormat::XmlSitemapIndex;
    }

    if has_html_doctype(trimmed) || content.contains("<html") {
        return SitemapFormat::Html;
    }

    if is_url_list(content) {
        return SitemapFormat::PlainText;
    }

    SitemapFormat::Unknown
}

fn has_html_doctype(trimmed: &str) -> bool {
    trimmed
        .get(.."<!doctype html".len())
        .is_some_and(|lead| lead.eq_ignore_ascii_case("<!doctype html"))
}

/// True when every line of the trimmed content parses as an absolute URL.
/// Empty content does not qualify.
fn is_url_list(content: &str) -> bool {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return false;
    }
    trimmed.lines().all(|line| Url::parse(line.trim()).is_ok())
}
