use clap::Parser;
use site_sweep::Crawl;
use site_sweep::results::CrawlReport;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Starting crawl of {}", args.seed);

    let mut crawl = Crawl::new(&args.seed)
        .with_max_depth(args.depth)
        .with_concurrency(args.concurrency)
        .with_max_pages(args.max_pages)
        .with_timeout(args.timeout);
    for pattern in &args.exclude_patterns {
        crawl = crawl.with_exclude_pattern(pattern);
    }

    let report = match crawl.run().await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    ::log::info!(
        "Crawl complete - discovered {} pages in {:.2} seconds",
        report.page_count(),
        report.duration_secs
    );

    print_report(&report, args.json);
}

/// Prints the report either as a plain URL list or as JSON
fn print_report(report: &CrawlReport, json: bool) {
    if json {
        match serde_json::to_string_pretty(report) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                eprintln!("Error: failed to serialize report: {}", e);
                std::process::exit(2);
            }
        }
    } else {
        for page in &report.pages {
            println!("{}", page);
        }
    }
}
