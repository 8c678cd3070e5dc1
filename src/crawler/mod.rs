//! Crawler module for site-link collection
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching with the Mod-Security recovery retry
//! - HTML parsing and link extraction
//! - The depth-first frontier
//! - Overall crawl coordination and budget enforcement

mod engine;
mod fetcher;
mod frontier;
mod parser;

pub use engine::Engine;
pub use fetcher::{build_http_client, fetch_page, FetchError};
pub use frontier::Frontier;
pub use parser::{extract_links, ParseError};

use crate::config::Config;
use crate::url::{normalize_url, CrawlScope};
use std::collections::HashSet;

/// How much of the site around the seed should be collected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlMode {
    /// Crawl every page on the seed's domain
    Domain,

    /// Take the seed page alone, no crawling
    ExactPage,

    /// Crawl only pages under the seed's netloc and path prefix
    Subdomain,
}

/// Collects the set of in-scope page URLs around a seed
///
/// This is the main library entry point: normalize the seed, pick the
/// scope, run the crawl. A seed that cannot be normalized fails here and
/// the crawl never starts. Exact-page mode degenerates to the normalized
/// seed itself and bypasses the engine entirely.
///
/// # Example
///
/// ```no_run
/// use linkharvest::{collect_site_urls, Config, CrawlMode};
///
/// # async fn example() -> linkharvest::Result<()> {
/// let urls = collect_site_urls("example.com", CrawlMode::Domain, Config::default()).await?;
/// for url in &urls {
///     println!("{}", url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn collect_site_urls(
    seed: &str,
    mode: CrawlMode,
    config: Config,
) -> crate::Result<HashSet<String>> {
    let normalized = normalize_url(seed)?;

    let scope = match mode {
        CrawlMode::ExactPage => {
            return Ok(HashSet::from([normalized.into_string()]));
        }
        CrawlMode::Domain => CrawlScope::whole_domain(&normalized),
        CrawlMode::Subdomain => CrawlScope::subdomain_prefix(&normalized),
    };

    let engine = Engine::new(config)?;
    Ok(engine.crawl(normalized.as_str(), &scope).await)
}
