use std::collections::HashSet;
use std::fmt;

use futures::future::join_all;
use url::Url;

use crate::config::{CrawlConfig, CrawlLimits};
use crate::fetch::{Fetch, FetchOutcome, HttpFetcher};
use crate::filter::{UrlFilter, UrlFilterConfig};
use crate::parser;

/// Error starting a crawl.
///
/// Per-page failures never surface here: a timed-out or failed fetch is
/// absorbed by the scheduler and the crawl runs to completion. Only an
/// unusable seed or configuration prevents a crawl from starting.
#[derive(Debug)]
pub enum CrawlError {
    /// The seed URL did not parse
    InvalidSeed(url::ParseError),
    /// The seed URL has no host to restrict the crawl to
    SeedWithoutHost(String),
    /// An exclude pattern failed to compile
    Pattern(regex::Error),
    /// The HTTP client could not be constructed
    Client(String),
}

impl fmt::Display for CrawlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrawlError::InvalidSeed(e) => write!(f, "invalid seed URL: {}", e),
            CrawlError::SeedWithoutHost(url) => write!(f, "seed URL has no host: {}", url),
            CrawlError::Pattern(e) => write!(f, "invalid exclude pattern: {}", e),
            CrawlError::Client(msg) => write!(f, "failed to build HTTP client: {}", msg),
        }
    }
}

impl std::error::Error for CrawlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CrawlError::InvalidSeed(e) => Some(e),
            CrawlError::Pattern(e) => Some(e),
            _ => None,
        }
    }
}

/// Crawl a site breadth-first from `config.seed_url` and return every
/// discovered same-origin URL, the seed included.
///
/// The crawl is bounded three ways: `max_depth` levels beyond the seed,
/// `max_pages` discovered URLs in total, and at most `concurrency` fetches
/// in flight at any instant. No state survives the call.
pub async fn crawl(config: &CrawlConfig) -> Result<HashSet<Url>, CrawlError> {
    let seed = Url::parse(&config.seed_url).map_err(CrawlError::InvalidSeed)?;
    let host = seed
        .host_str()
        .ok_or_else(|| CrawlError::SeedWithoutHost(config.seed_url.clone()))?;

    let mut filter_config = UrlFilterConfig::for_host(host);
    filter_config
        .exclude_patterns
        .extend(config.exclude_patterns.clone());
    let filter = UrlFilter::new(filter_config).map_err(CrawlError::Pattern)?;

    let fetcher = HttpFetcher::new(config.timeout(), &config.user_agent)
        .map_err(|e| CrawlError::Client(e.to_string()))?;

    Ok(run_levels(&fetcher, seed, &filter, config.limits()).await)
}

/// The level scheduler: breadth-first traversal over discrete levels.
///
/// Each level's frontier is partitioned in order into batches of at most
/// `limits.concurrency` URLs. A batch is fetched concurrently and joined
/// before any state changes, so the visited set is only ever mutated
/// between batches on this task; no locking is involved. Links discovered
/// by a batch are inserted into the visited set before the next batch
/// starts, which keeps a URL from being queued twice within one level.
///
/// The page cap is hard: insertion stops exactly at `max_pages` and the
/// crossing batch's surplus links are discarded.
pub async fn run_levels<F: Fetch>(
    fetcher: &F,
    seed: Url,
    filter: &UrlFilter,
    limits: CrawlLimits,
) -> HashSet<Url> {
    let mut visited: HashSet<Url> = HashSet::new();
    visited.insert(seed.clone());

    let mut frontier = vec![seed];
    let mut depth = 0;
    let batch_size = limits.concurrency.max(1);

    while depth < limits.max_depth && !frontier.is_empty() && visited.len() < limits.max_pages {
        ::log::info!(
            "level {}: {} pages queued, {} discovered so far",
            depth,
            frontier.len(),
            visited.len()
        );

        let mut next_frontier = Vec::new();

        for batch in frontier.chunks(batch_size) {
            let outcomes = join_all(batch.iter().cloned().map(|url| fetcher.fetch(url))).await;

            for outcome in outcomes {
                let (url, body) = match outcome {
                    FetchOutcome::Page { url, body } => (url, body),
                    FetchOutcome::Failed { url, reason } => {
                        // Terminal for this URL: no links, no retry
                        ::log::warn!("fetch failed for {}: {}", url, reason);
                        continue;
                    }
                };

                for link in parser::extract_links(&body, &url) {
                    if visited.len() >= limits.max_pages {
                        break;
                    }
                    if !filter.should_crawl(&link) {
                        ::log::debug!("filter rejected: {}", link);
                        continue;
                    }
                    if visited.insert(link.clone()) {
                        next_frontier.push(link);
                    }
                }
            }

            if visited.len() >= limits.max_pages {
                ::log::info!(
                    "page cap of {} reached, stopping level {} early",
                    limits.max_pages,
                    depth
                );
                break;
            }
        }

        frontier = next_frontier;
        depth += 1;
    }

    ::log::info!("crawl finished after {} levels, {} pages", depth, visited.len());

    visited
}
