//! Crawl engine - traversal, bookkeeping, and budget enforcement
//!
//! The engine walks a site depth-first from a seed URL. All crawl state
//! lives in a per-call traversal context; nothing survives between crawls.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_page};
use crate::crawler::frontier::Frontier;
use crate::crawler::parser::extract_links;
use crate::url::{is_valid_url, is_webpage, CrawlScope};
use reqwest::Client;
use std::collections::HashSet;
use std::time::Instant;
use url::Url;

/// Per-crawl traversal state, created fresh for every crawl call
struct TraversalContext {
    /// Every in-scope URL seen so far; doubles as the cycle breaker
    visited: HashSet<String>,

    /// URLs waiting to be expanded, depth-first
    frontier: Frontier,

    /// Pages actually fetched, checked against the visit budget
    pages_fetched: u32,
}

impl TraversalContext {
    fn new(seed: &str) -> Self {
        let mut visited = HashSet::new();
        visited.insert(seed.to_string());

        Self {
            visited,
            frontier: Frontier::seeded(seed),
            pages_fetched: 0,
        }
    }
}

/// Crawl engine holding the HTTP client and configuration
pub struct Engine {
    client: Client,
    config: Config,
}

impl Engine {
    /// Creates an engine with its own HTTP client
    pub fn new(config: Config) -> crate::Result<Self> {
        let client = build_http_client(&config.fetcher)?;
        Ok(Self { client, config })
    }

    /// Walks the site depth-first from `seed` and returns every in-scope
    /// page URL seen
    ///
    /// The seed itself is always part of the result. Individual page
    /// failures contribute zero links and are logged; the crawl itself
    /// never fails. Termination: frontier exhausted, or the visit budget
    /// stops new dispatches.
    pub async fn crawl(&self, seed: &str, scope: &CrawlScope) -> HashSet<String> {
        let mut ctx = TraversalContext::new(seed);
        let started = Instant::now();

        while let Some(page_url) = ctx.frontier.pop() {
            // Budget is checked at each dispatch point, before the fetch
            if ctx.pages_fetched >= self.config.crawler.max_pages {
                tracing::info!(
                    "Visit budget of {} pages reached, stopping dispatch",
                    self.config.crawler.max_pages
                );
                break;
            }
            ctx.pages_fetched += 1;

            tracing::debug!("Visiting {}", page_url);
            let survivors = self
                .expand_page(&page_url, scope, &mut ctx.visited)
                .await;
            ctx.frontier.push_links(survivors);

            if ctx.pages_fetched % 10 == 0 {
                let rate = ctx.pages_fetched as f64 / started.elapsed().as_secs_f64();
                tracing::info!(
                    "Progress: {} pages fetched, {} URLs collected, {} in frontier, {:.2} pages/sec",
                    ctx.pages_fetched,
                    ctx.visited.len(),
                    ctx.frontier.len(),
                    rate
                );
            }
        }

        tracing::info!(
            "Crawl finished: {} pages fetched, {} URLs collected in {:?}",
            ctx.pages_fetched,
            ctx.visited.len(),
            started.elapsed()
        );

        ctx.visited
    }

    /// Fetches one page and returns its surviving outbound links, already
    /// recorded in the visited set
    ///
    /// Candidates run the gauntlet in a fixed order: well-formed URL,
    /// webpage (not asset), not already visited, in scope. A fetch or
    /// parse failure means zero links from this page, never a failed
    /// crawl.
    async fn expand_page(
        &self,
        page_url: &str,
        scope: &CrawlScope,
        visited: &mut HashSet<String>,
    ) -> Vec<String> {
        let base = match Url::parse(page_url) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!("Skipping unparseable page URL {}: {}", page_url, e);
                return Vec::new();
            }
        };

        let body = match fetch_page(&self.client, page_url).await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("No links from this page: {}", e);
                return Vec::new();
            }
        };

        let candidates = match extract_links(&base, &body) {
            Ok(candidates) => candidates,
            Err(e) => {
                tracing::warn!("No links from {}: {}", page_url, e);
                return Vec::new();
            }
        };

        let mut survivors = Vec::new();
        for candidate in candidates {
            if !is_valid_url(&candidate) {
                continue;
            }
            if !is_webpage(&candidate) {
                continue;
            }
            if visited.contains(&candidate) {
                continue;
            }
            if !scope.contains(&candidate) {
                continue;
            }

            visited.insert(candidate.clone());
            survivors.push(candidate);
        }

        survivors
    }
}
