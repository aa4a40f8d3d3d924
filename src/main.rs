//! asap-scrape main entry point
//!
//! Command-line interface for the ASAP Sports transcript scraper.

use asap_scrape::config::{default_config, load_config, Config};
use asap_scrape::crawler::crawl;
use asap_scrape::output::print_store_stats;
use asap_scrape::store::CsvStore;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// asap-scrape: ASAP Sports transcript archive scraper
///
/// Crawls one archive category letter by letter, extracts interview metadata
/// and transcript text, and appends rows to a CSV file. Re-running resumes
/// from the ids already present in the CSV; keep re-running until no new
/// records appear.
#[derive(Parser, Debug)]
#[command(name = "asap-scrape")]
#[command(version)]
#[command(about = "ASAP Sports transcript archive scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (optional; defaults cover the
    /// baseball category)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Ignore existing CSV rows instead of resuming (may duplicate rows)
    #[arg(long)]
    no_resume: bool,

    /// Only crawl the first N letter partitions (bounded test runs)
    #[arg(long, value_name = "N")]
    max_letters: Option<usize>,

    /// Override the inter-request delay in milliseconds
    #[arg(long, value_name = "MS")]
    rate_limit_ms: Option<u64>,

    /// Override the output CSV path
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Validate config and show what would be crawled without any network
    #[arg(long, conflicts_with = "stats")]
    dry_run: bool,

    /// Show statistics for the existing CSV and exit
    #[arg(long, conflicts_with = "dry_run")]
    stats: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => default_config()?,
    };
    apply_overrides(&mut config, &cli)?;

    if cli.dry_run {
        handle_dry_run(&config);
    } else if cli.stats {
        handle_stats(&config);
    } else {
        handle_crawl(config).await?;
    }

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("asap_scrape=info,warn"),
            1 => EnvFilter::new("asap_scrape=debug,info"),
            2 => EnvFilter::new("asap_scrape=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Applies CLI flag overrides on top of the loaded configuration.
fn apply_overrides(config: &mut Config, cli: &Cli) -> anyhow::Result<()> {
    if cli.no_resume {
        config.crawler.resume = false;
    }
    if let Some(max_letters) = cli.max_letters {
        anyhow::ensure!(
            (1..=26).contains(&max_letters),
            "--max-letters must be between 1 and 26, got {}",
            max_letters
        );
        config.crawler.max_letters = Some(max_letters);
    }
    if let Some(rate_limit_ms) = cli.rate_limit_ms {
        config.crawler.rate_limit_ms = rate_limit_ms;
    }
    if let Some(output) = &cli.output {
        config.output.csv_path = output.to_string_lossy().into_owned();
    }
    Ok(())
}

/// Handles --dry-run: prints the resolved configuration, no network access.
fn handle_dry_run(config: &Config) {
    println!("=== asap-scrape Dry Run ===\n");

    println!("Site:");
    println!("  Landing URL: {}", config.site.landing_url);

    println!("\nCrawler:");
    println!("  Rate limit: {}ms between requests", config.crawler.rate_limit_ms);
    println!("  Resume: {}", config.crawler.resume);
    match config.crawler.max_letters {
        Some(n) => println!("  Letter partitions: first {} of 26", n),
        None => println!("  Letter partitions: all 26"),
    }

    println!("\nUser Agent:");
    println!("  Name: {}", config.user_agent.name);
    println!("  Version: {}", config.user_agent.version);
    println!("  Contact URL: {}", config.user_agent.contact_url);

    println!("\nOutput:");
    println!("  CSV: {}", config.output.csv_path);

    println!("\nConfiguration is valid.");
}

/// Handles --stats: reports on the existing CSV and exits.
fn handle_stats(config: &Config) {
    let store = CsvStore::new(&config.output.csv_path);
    print_store_stats(&store);
}

/// Handles the main crawl operation
async fn handle_crawl(config: Config) -> anyhow::Result<()> {
    let csv_path = PathBuf::from(&config.output.csv_path);
    tracing::info!(
        "Crawling {} -> {} ({}ms between requests)",
        config.site.landing_url,
        csv_path.display(),
        config.crawler.rate_limit_ms
    );

    let stats = crawl(config).await?;
    stats.print_summary(&csv_path);
    Ok(())
}
