//! Anchor extraction from HTML sitemap pages.

/// Collect `href` values of anchor tags whose value starts with `http`.
///
/// Relative hrefs, anchors, `javascript:` and `mailto:` links all fail the
/// `http` prefix check and are dropped; an HTML sitemap worth crawling
/// lists absolute URLs.
pub fn extract_anchor_urls(content: &str) -> Vec<String> {
    let anchor_pattern =
        regex::Regex::new(r#"(?is)<a\s[^>]*?href\s*=\s*["']([^"']+)["']"#).unwrap();

    let mut urls = Vec::new();
    for cap in anchor_pattern.captures_iter(content) {
        if let Some(href) = cap.get(1) {
            let href = href.as_str().trim();
            if href.starts_with("http") {
                urls.push(href.to_string());
            }
        }
    }
    urls
}
