//! Crawl coordinator - three-level traversal
//!
//! Drives the letter → player → interview hierarchy depth-first. Per letter:
//! fetch the index page, extract player links; per player: fetch the player
//! page, extract interview links; per interview: resolve the id, apply the
//! resume filter, fetch, extract, and append. A fetch failure anywhere skips
//! that subtree; only store write failures abort the run.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, FetchOutcome, Fetcher};
use crate::crawler::links::{interview_links, page_heading, player_links, InterviewLink};
use crate::extract::extract;
use crate::output::RunStats;
use crate::store::{CsvStore, SeenIds};
use crate::url::{base_and_category, interview_id, letter_index_urls};
use crate::Result;
use scraper::Html;
use std::time::Duration;
use url::Url;

/// Main crawl coordinator
pub struct Coordinator {
    config: Config,
    fetcher: Fetcher,
    store: CsvStore,
    seen: SeenIds,
    stats: RunStats,
    base: String,
    base_url: Url,
    category: String,
}

impl Coordinator {
    /// Creates a coordinator: opens (or creates) the store, rebuilds the
    /// resume index from it, and builds the HTTP client.
    pub fn new(config: Config) -> Result<Self> {
        let landing = Url::parse(&config.site.landing_url)?;
        let (base, category) = base_and_category(&landing);
        let base_url = Url::parse(&base)?;

        let store = CsvStore::new(&config.output.csv_path);
        let seen = if config.crawler.resume {
            let seen = SeenIds::load(&store);
            tracing::info!("Resume index: {} known interview ids", seen.len());
            seen
        } else {
            tracing::info!("Resume disabled; existing rows will not be skipped");
            SeenIds::empty()
        };
        store.ensure_header()?;

        let client = build_http_client(&config.user_agent)?;
        let fetcher = Fetcher::new(
            client,
            Duration::from_millis(config.crawler.rate_limit_ms),
        );

        Ok(Self {
            config,
            fetcher,
            store,
            seen,
            stats: RunStats::default(),
            base,
            base_url,
            category,
        })
    }

    /// Runs the full crawl and returns the run counters.
    pub async fn run(mut self) -> Result<RunStats> {
        let letters = letter_index_urls(
            &self.base,
            &self.category,
            self.config.crawler.max_letters,
        );
        tracing::info!(
            "Starting crawl: category {} on {}, {} letter partitions",
            self.category,
            self.base,
            letters.len()
        );

        for letter_url in letters {
            let doc = match self.fetcher.fetch(&letter_url).await {
                FetchOutcome::Page(doc) => doc,
                failure => {
                    self.stats.fetch_failures += 1;
                    tracing::warn!(
                        "Skipping letter index {}: {}",
                        letter_url,
                        failure.failure_reason().unwrap_or_default()
                    );
                    continue;
                }
            };
            self.stats.letters += 1;

            let players = player_links(&doc, &self.base_url);
            tracing::info!("{}: {} players", letter_url, players.len());

            for player in players {
                self.process_player(&player.url, &player.name).await?;
            }
        }

        tracing::info!(
            "Crawl complete: {} new records ({} skipped as known, {} fetch failures)",
            self.stats.new_records,
            self.stats.skipped_known,
            self.stats.fetch_failures
        );
        Ok(self.stats)
    }

    /// Fetches one player page and walks its interview list.
    async fn process_player(&mut self, player_url: &Url, letter_page_name: &str) -> Result<()> {
        let doc = match self.fetcher.fetch(player_url).await {
            FetchOutcome::Page(doc) => doc,
            failure => {
                self.stats.fetch_failures += 1;
                tracing::warn!(
                    "Skipping player {}: {}",
                    player_url,
                    failure.failure_reason().unwrap_or_default()
                );
                return Ok(());
            }
        };
        self.stats.players += 1;

        // The player page h1 is the canonical name; the letter-page anchor
        // label is the fallback.
        let player_name = page_heading(&doc).unwrap_or_else(|| letter_page_name.to_string());

        for link in interview_links(&doc, &self.base_url) {
            // Some link shapes carry no id; those cannot participate in
            // resume tracking and are skipped outright.
            let Some(id) = interview_id(&link.url) else {
                continue;
            };
            if self.seen.is_known(&id) {
                self.stats.skipped_known += 1;
                continue;
            }
            self.scrape_interview(link, &player_name, id).await?;
        }

        Ok(())
    }

    /// Fetches one interview page, extracts a record, and appends it.
    async fn scrape_interview(
        &mut self,
        link: InterviewLink,
        player_name: &str,
        id: String,
    ) -> Result<()> {
        let doc = match self.fetcher.fetch(&link.url).await {
            FetchOutcome::Page(doc) => doc,
            failure => {
                self.stats.fetch_failures += 1;
                tracing::warn!(
                    "Skipping interview {}: {}",
                    link.url,
                    failure.failure_reason().unwrap_or_default()
                );
                return Ok(());
            }
        };

        let record = self.build_record(&doc, link, player_name, id.clone());

        // Append before marking: the id set must never claim a row the file
        // does not hold.
        self.store.append(&record)?;
        self.seen.mark(id);
        self.stats.new_records += 1;
        tracing::debug!("Wrote {} ({})", record.interview_id, record.interview_title);

        Ok(())
    }

    /// Extracts the in-page record and applies the player-page overrides:
    /// the player-level name always wins, the index-page inline date wins
    /// when present, and the link title fills a missing page title.
    fn build_record(
        &self,
        doc: &Html,
        link: InterviewLink,
        player_name: &str,
        id: String,
    ) -> crate::store::Record {
        let mut record = extract(doc);
        record.player_name = player_name.to_string();
        if record.interview_title.is_empty() {
            record.interview_title = link.title;
        }
        if !link.date.is_empty() {
            record.date = link.date;
        }
        record.interview_id = id;
        record.url = link.url.to_string();
        record
    }
}

/// Runs a full crawl with the given configuration.
pub async fn run_crawl(config: Config) -> Result<RunStats> {
    Coordinator::new(config)?.run().await
}
