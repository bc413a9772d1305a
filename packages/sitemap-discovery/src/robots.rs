//! Minimal robots.txt parsing.
//!
//! Scoped to what sitemap location needs: the `Sitemap:` directives, the
//! allow/disallow rules that apply to our user agent, and the crawl delay.
//! Rules are flattened to a single agent's view at parse time: the group
//! naming the agent wins, the `*` group is the fallback.

use std::time::Duration;

#[derive(Debug, Clone, Default)]
struct Group {
    agents: Vec<String>,
    allow: Vec<String>,
    disallow: Vec<String>,
    crawl_delay: Option<f64>,
}

/// The robots.txt rules in effect for one user agent.
#[derive(Debug, Clone, Default)]
pub struct RobotsTxt {
    allow: Vec<String>,
    disallow: Vec<String>,
    crawl_delay: Option<f64>,
    sitemaps: Vec<String>,
}

impl RobotsTxt {
    /// Parse robots.txt content, resolving rules for `user_agent`.
    ///
    /// Agent names match case-insensitively as substrings of the supplied
    /// agent string, the way crawlers conventionally match product tokens.
    pub fn parse(content: &str, user_agent: &str) -> Self {
        let mut groups: Vec<Group> = Vec::new();
        let mut sitemaps = Vec::new();
        // A user-agent line directly after another extends the same group;
        // one following rules starts a new group.
        let mut open_group = false;

        for line in content.lines() {
            let line = line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let Some((directive, value)) = line.split_once(':') else {
                continue;
            };
            let directive = directive.trim().to_ascii_lowercase();
            let value = value.trim();

            match directive.as_str() {
                "user-agent" => {
                    if !open_group || groups.is_empty() {
                        groups.push(Group::default());
                        open_group = true;
                    }
                    if let Some(group) = groups.last_mut() {
                        group.agents.push(value.to_ascii_lowercase());
                    }
                }
                "allow" | "disallow" | "crawl-delay" => {
                    open_group = false;
                    let Some(group) = groups.last_mut() else {
                        continue;
                    };
                    match directive.as_str() {
                        "allow" if !value.is_empty() => group.allow.push(value.to_string()),
                        "disallow" if !value.is_empty() => group.disallow.push(value.to_string()),
                        "crawl-delay" => {
                            if let Ok(delay) = value.parse::<f64>() {
                                group.crawl_delay = Some(delay);
                            }
                        }
                        _ => {}
                    }
                }
                "sitemap" if !value.is_empty() => {
                    sitemaps.push(value.to_string());
                }
                _ => {}
            }
        }

        let ua = user_agent.to_ascii_lowercase();
        let named = groups
            .iter()
            .find(|g| g.agents.iter().any(|a| a != "*" && ua.contains(a.as_str())));
        let fallback = groups.iter().find(|g| g.agents.iter().any(|a| a == "*"));

        let effective = named.or(fallback).cloned().unwrap_or_default();

        Self {
            allow: effective.allow,
            disallow: effective.disallow,
            crawl_delay: effective.crawl_delay,
            sitemaps,
        }
    }

    /// Check whether a path is allowed. Allow rules take precedence.
    pub fn is_allowed(&self, path: &str) -> bool {
        if self.allow.iter().any(|a| path.starts_with(a)) {
            return true;
        }
        !self
            .disallow
            .iter()
            .any(|d| d == "/" || path.starts_with(d))
    }

    /// True when crawling is disallowed entirely.
    pub fn disallows_all(&self) -> bool {
        !self.is_allowed("/")
    }

    /// Crawl delay, if declared.
    pub fn crawl_delay(&self) -> Option<Duration> {
        self.crawl_delay.map(Duration::from_secs_f64)
    }

    /// Sitemap URLs declared anywhere in the file.
    pub fn sitemaps(&self) -> &[String] {
        &self.sitemaps
    }
}
