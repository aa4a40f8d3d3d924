//! Crawler module for the three-level archive traversal
//!
//! This module contains the core crawling logic:
//! - Rate-limited HTTP fetching
//! - Link extraction from letter and player pages
//! - Overall traversal coordination with resume filtering

mod coordinator;
mod fetcher;
mod links;

pub use coordinator::{run_crawl, Coordinator};
pub use fetcher::{build_http_client, FetchOutcome, Fetcher};
pub use links::{interview_links, page_heading, player_links, InterviewLink, PlayerLink};

use crate::config::Config;
use crate::output::RunStats;
use crate::Result;

/// Runs a complete crawl: letters → players → interviews → CSV rows.
/// Returns the run counters for the end-of-run summary.
pub async fn crawl(config: Config) -> Result<RunStats> {
    run_crawl(config).await
}
