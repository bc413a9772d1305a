//! Plain-text sitemap extraction (one URL per line).

/// Keep lines that, after trimming, start with `http`.
pub fn extract_text_urls(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| line.starts_with("http"))
        .map(str::to_string)
        .collect()
}
