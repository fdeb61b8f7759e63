use serde::{Deserialize, Serialize};

/// Summary of one completed crawl
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlReport {
    /// The seed URL the crawl started from
    pub seed: String,

    /// Every discovered URL, sorted for stable output
    pub pages: Vec<String>,

    /// Wall-clock seconds the crawl took
    pub duration_secs: f64,
}

impl CrawlReport {
    /// Create a report, sorting the page list
    pub fn new(seed: String, mut pages: Vec<String>, duration_secs: f64) -> Self {
        pages.sort();
        Self {
            seed,
            pages,
            duration_secs,
        }
    }

    /// Number of discovered pages, the seed included
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
