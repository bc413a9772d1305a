//! `<loc>` extraction from XML sitemaps and sitemap indexes.

use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::{debug, warn};

/// Collect the text content of every `loc` element.
///
/// The streaming parse matches elements by local name, so `loc`,
/// `sm:loc`, and documents missing the sitemaps.org namespace entirely
/// all extract the same way. If the stream errors on malformed markup,
/// a namespace-agnostic regex scan over the raw text takes over.
pub fn extract_loc_urls(content: &str) -> Vec<String> {
    match parse_locs(content) {
        Ok(urls) => urls,
        Err(e) => {
            warn!(error = %e, "XML parse failed, falling back to tag scan");
            scan_locs(content)
        }
    }
}

fn parse_locs(content: &str) -> Result<Vec<String>, quick_xml::Error> {
    let mut reader = Reader::from_str(content);
    reader.config_mut().trim_text(true);

    let mut urls = Vec::new();
    let mut in_loc = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                in_loc = e.local_name().as_ref() == b"loc";
            }
            Event::End(_) => {
                in_loc = false;
            }
            Event::Text(t) if in_loc => {
                if let Ok(text) = t.unescape() {
                    push_nonempty(&mut urls, &text);
                }
            }
            Event::CData(t) if in_loc => {
                push_nonempty(&mut urls, &String::from_utf8_lossy(&t.into_inner()));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    debug!(count = urls.len(), "extracted loc elements");
    Ok(urls)
}

/// Last-resort scan for `<loc>…</loc>` pairs, tolerating namespace
/// prefixes and attributes, on documents the XML reader rejects.
fn scan_locs(content: &str) -> Vec<String> {
    let loc_pattern =
        regex::Regex::new(r"(?is)<(?:[a-z0-9._-]+:)?loc(?:\s[^>]*)?>(.*?)</(?:[a-z0-9._-]+:)?loc\s*>")
            .unwrap();

    let mut urls = Vec::new();
    for cap in loc_pattern.captures_iter(content) {
        if let Some(inner) = cap.get(1) {
            let inner = inner
                .as_str()
                .trim()
                .trim_start_matches("<![CDATA[")
                .trim_end_matches("]]>");
            push_nonempty(&mut urls, &unescape_entities(inner));
        }
    }
    urls
}

fn push_nonempty(urls: &mut Vec<String>, text: &str) {
    let text = text.trim();
    if !text.is_empty() {
        urls.push(text.to_string());
    }
}

fn unescape_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}
