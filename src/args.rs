use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "site-sweep")]
#[command(about = "Bounded breadth-first crawler that maps the pages of a single site")]
#[command(version)]
pub struct Args {
    /// Seed URL to start crawling from
    pub seed: String,

    /// Levels to traverse beyond the seed
    #[arg(short, long, default_value_t = 2)]
    pub depth: usize,

    /// Number of concurrent fetches per batch
    #[arg(short, long, default_value_t = 4)]
    pub concurrency: usize,

    /// Maximum number of pages to discover, the seed included
    #[arg(short, long, default_value_t = 100)]
    pub max_pages: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Regex patterns for URLs to exclude (repeatable)
    #[arg(long = "exclude")]
    pub exclude_patterns: Vec<String>,

    /// Emit the crawl report as JSON instead of a plain URL list
    #[arg(long)]
    pub json: bool,
}
