// Re-export modules
pub mod config;
pub mod crawler;
pub mod fetch;
pub mod filter;
pub mod parser;
pub mod results;

// Re-export commonly used types for convenience
pub use crawler::CrawlError;
pub use results::CrawlReport;

use std::time::Instant;

use config::CrawlConfig;

/// Builder for configuring and running one bounded crawl
pub struct Crawl {
    config: CrawlConfig,
}

impl Crawl {
    /// Create a new Crawl builder for the given seed URL
    pub fn new(seed_url: &str) -> Self {
        Self {
            config: CrawlConfig::new(seed_url),
        }
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: CrawlConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        mut self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        self.config = CrawlConfig::from_file(path)?;
        Ok(self)
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(mut self, json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        self.config = CrawlConfig::from_json(json)?;
        Ok(self)
    }

    /// Set how many levels to traverse beyond the seed
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.config.max_depth = max_depth;
        self
    }

    /// Set the maximum number of concurrent fetches per batch
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.config.concurrency = concurrency;
        self
    }

    /// Set the global cap on discovered pages
    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.config.max_pages = max_pages;
        self
    }

    /// Set the per-request timeout in seconds
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.config.timeout_secs = seconds;
        self
    }

    /// Add a regex pattern for URLs to exclude
    pub fn with_exclude_pattern(mut self, pattern: &str) -> Self {
        self.config.exclude_patterns.push(pattern.to_string());
        self
    }

    /// Run the crawl and produce a report
    pub async fn run(self) -> Result<CrawlReport, CrawlError> {
        let started = Instant::now();

        let visited = crawler::crawl(&self.config).await?;
        let pages: Vec<String> = visited.into_iter().map(String::from).collect();

        Ok(CrawlReport::new(
            self.config.seed_url,
            pages,
            started.elapsed().as_secs_f64(),
        ))
    }
}
