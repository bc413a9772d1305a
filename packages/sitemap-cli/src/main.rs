//! sitemap-scan: discover inventory page URLs from a dealer sitemap.
//!
//! Feeds a root sitemap URL (or a site root with `--locate`) through the
//! discovery engine and prints the leaf URLs, one per line, or the full
//! report as JSON. Downstream scrapers pipe the output into their own
//! provider-specific filters.

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use sitemap_discovery::{
    discover, locate_sitemaps, BrowserFetcher, DiscoverOptions, DiscoverResult, Fetcher,
    HttpFetcher,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FetchStrategy {
    /// Plain HTTP client
    Http,
    /// External headless-browser rendering API (needs RENDER_API_TOKEN)
    Browser,
}

#[derive(Parser, Debug)]
#[command(name = "sitemap-scan", about = "Discover inventory URLs from dealer sitemaps")]
struct Args {
    /// Root sitemap URL, or a site URL when --locate is set
    url: String,

    /// Treat URL as a site root and locate its sitemaps via robots.txt
    /// and conventional paths first
    #[arg(long)]
    locate: bool,

    /// Maximum sitemap nesting depth
    #[arg(long, default_value_t = DiscoverOptions::DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Fetch strategy
    #[arg(long, value_enum, default_value_t = FetchStrategy::Http)]
    fetcher: FetchStrategy,

    /// User agent for HTTP fetches and robots.txt matching
    #[arg(long, default_value = "SitemapDiscovery/1.0")]
    user_agent: String,

    /// Politeness delay between HTTP fetches (milliseconds)
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Per-request timeout for the HTTP strategy (seconds)
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Print the full traversal report as JSON instead of bare URLs
    #[arg(long)]
    json: bool,
}

fn build_fetcher(args: &Args) -> Result<Box<dyn Fetcher>> {
    match args.fetcher {
        FetchStrategy::Http => Ok(Box::new(
            HttpFetcher::new()
                .with_user_agent(&args.user_agent)
                .with_timeout(std::time::Duration::from_secs(args.timeout_secs))
                .with_delay_ms(args.delay_ms),
        )),
        FetchStrategy::Browser => {
            let token = std::env::var("RENDER_API_TOKEN")
                .context("RENDER_API_TOKEN must be set for --fetcher browser")?;
            Ok(Box::new(
                BrowserFetcher::new(token).context("Failed to build browser fetcher")?,
            ))
        }
    }
}

fn print_result(result: &DiscoverResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        for url in &result.leaf_urls {
            println!("{}", url);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sitemap_discovery=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let fetcher = build_fetcher(&args)?;

    let roots = if args.locate {
        let found = locate_sitemaps(fetcher.as_ref(), &args.url, &args.user_agent).await;
        if found.is_empty() {
            bail!("no sitemaps located for {}", args.url);
        }
        found
    } else {
        vec![args.url.clone()]
    };

    let mut any_accessible = false;
    for root in roots {
        tracing::info!(root = %root, "scanning sitemap");
        let result = discover(
            &root,
            fetcher.as_ref(),
            DiscoverOptions::new().with_max_depth(args.max_depth),
        )
        .await;

        any_accessible |= result.accessible;
        print_result(&result, args.json)?;
    }

    if !any_accessible {
        bail!("no sitemap was accessible");
    }
    Ok(())
}
