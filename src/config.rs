use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Hard bounds on one crawl invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlLimits {
    /// Levels to traverse beyond the seed
    pub max_depth: usize,

    /// Maximum number of concurrent fetches per batch
    pub concurrency: usize,

    /// Global cap on discovered pages, the seed included
    pub max_pages: usize,
}

/// Configuration for a bounded same-origin crawl
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlConfig {
    /// URL to start crawling from
    pub seed_url: String,

    /// Levels to traverse beyond the seed
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Maximum number of concurrent fetches per batch
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Global cap on discovered pages, the seed included
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Extra regex patterns for URLs to exclude, on top of the stock
    /// asset exclusions
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

/// Default value for max_depth
fn default_max_depth() -> usize {
    2
}

/// Default value for concurrency
fn default_concurrency() -> usize {
    4
}

/// Default value for max_pages
fn default_max_pages() -> usize {
    100
}

/// Default per-request timeout
fn default_timeout_secs() -> u64 {
    10
}

/// Default User-Agent string
fn default_user_agent() -> String {
    concat!("site-sweep/", env!("CARGO_PKG_VERSION")).to_string()
}

impl CrawlConfig {
    /// Create a new configuration with default values
    pub fn new(seed_url: &str) -> Self {
        Self {
            seed_url: seed_url.to_string(),
            max_depth: default_max_depth(),
            concurrency: default_concurrency(),
            max_pages: default_max_pages(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            exclude_patterns: Vec::new(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// The hard bounds the scheduler enforces
    pub fn limits(&self) -> CrawlLimits {
        CrawlLimits {
            max_depth: self.max_depth,
            concurrency: self.concurrency.max(1),
            max_pages: self.max_pages.max(1),
        }
    }

    /// Per-request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
