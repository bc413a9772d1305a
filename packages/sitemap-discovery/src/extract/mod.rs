//! Per-format URL extraction.
//!
//! One strategy per classified format, each producing a flat ordered list
//! of raw URL strings. Extractors never panic on malformed input: a failed
//! parse logs the reason and degrades to whatever a tolerant scan can
//! recover, or to an empty list.

mod html;
mod text;
mod xml;

pub use html::extract_anchor_urls;
pub use text::extract_text_urls;
pub use xml::extract_loc_urls;

use crate::classify::SitemapFormat;

/// Extract raw URL strings from `content` using the strategy matching its
/// classified format. The URLs are not yet partitioned into nested
/// sitemaps vs leaf pages; that is the traversal engine's job.
pub fn extract(format: SitemapFormat, content: &str) -> Vec<String> {
    match format {
        SitemapFormat::XmlUrlset | SitemapFormat::XmlSitemapIndex => extract_loc_urls(content),
        SitemapFormat::Html => extract_anchor_urls(content),
        SitemapFormat::PlainText => extract_text_urls(content),
        SitemapFormat::Unknown => Vec::new(),
    }
}
