//! HTTP fetcher
//!
//! All network access goes through [`Fetcher::fetch`], which performs one
//! blocking GET and then sleeps for the configured delay whether or not the
//! request succeeded. The delay is the crawl's entire politeness mechanism:
//! requests are strictly sequential, so the post-request sleep guarantees a
//! minimum spacing between any two hits on the site.
//!
//! There is no retry. A failed fetch is skipped for the rest of the run; the
//! page was never marked known, so the next full run picks it up again.

use crate::config::UserAgentConfig;
use reqwest::Client;
use scraper::Html;
use std::time::Duration;
use url::Url;

/// Result of a fetch operation
#[derive(Debug)]
pub enum FetchOutcome {
    /// Successfully fetched and parsed the page
    Page(Html),

    /// Non-2xx response
    HttpStatus(u16),

    /// Transport error (connection refused, timeout, body read failure)
    Network(String),
}

impl FetchOutcome {
    /// Skip-level description for logging failed fetches.
    pub fn failure_reason(&self) -> Option<String> {
        match self {
            FetchOutcome::Page(_) => None,
            FetchOutcome::HttpStatus(status) => Some(format!("HTTP {}", status)),
            FetchOutcome::Network(error) => Some(error.clone()),
        }
    }
}

/// Builds the HTTP client used for the whole run.
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    // Format: name/version (+contact-url)
    let user_agent = format!(
        "{}/{} (+{})",
        config.name, config.version, config.contact_url
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Rate-limited page fetcher. One request in flight at any time.
pub struct Fetcher {
    client: Client,
    delay: Duration,
}

impl Fetcher {
    pub fn new(client: Client, delay: Duration) -> Self {
        Self { client, delay }
    }

    /// Fetches and parses one page, then waits out the inter-request delay.
    /// The delay applies on failure too; a misbehaving server should slow us
    /// down, not speed us up.
    pub async fn fetch(&self, url: &Url) -> FetchOutcome {
        let outcome = self.fetch_inner(url).await;
        tokio::time::sleep(self.delay).await;
        outcome
    }

    async fn fetch_inner(&self, url: &Url) -> FetchOutcome {
        match self.client.get(url.clone()).send().await {
            Ok(response) => {
                let status = response.status();
                if !status.is_success() {
                    return FetchOutcome::HttpStatus(status.as_u16());
                }
                match response.text().await {
                    Ok(body) => FetchOutcome::Page(Html::parse_document(&body)),
                    Err(e) => FetchOutcome::Network(e.to_string()),
                }
            }
            Err(e) => {
                if e.is_timeout() {
                    FetchOutcome::Network("Request timeout".to_string())
                } else if e.is_connect() {
                    FetchOutcome::Network("Connection refused".to_string())
                } else {
                    FetchOutcome::Network(e.to_string())
                }
            }
        }
    }
}
