use serde::Deserialize;

/// Main configuration structure for asap-scrape
///
/// Every section carries defaults, so the binary runs without a config file;
/// CLI flags override individual fields after loading.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    pub site: SiteConfig,
    pub crawler: CrawlerConfig,
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SiteConfig {
    /// Landing URL for one archive category. The site base and category id
    /// are derived from it.
    pub landing_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            // Baseball category
            landing_url: "https://www.asapsports.com/showcat.php?id=2".to_string(),
        }
    }
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CrawlerConfig {
    /// Fixed delay after every request, success or failure (milliseconds).
    /// This is the global rate limiter: requests are strictly sequential.
    pub rate_limit_ms: u64,

    /// Skip interviews whose ids are already present in the output CSV.
    pub resume: bool,

    /// Cap on the number of letter partitions processed (None = all 26).
    /// Useful for bounded test runs.
    pub max_letters: Option<usize>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            rate_limit_ms: 800,
            resume: true,
            max_letters: None,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct UserAgentConfig {
    /// Name of the scraper
    pub name: String,

    /// Version of the scraper
    pub version: String,

    /// URL with information about the scraper
    pub contact_url: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: "asap-scrape".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://github.com/asap-scrape/asap-scrape".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct OutputConfig {
    /// Path to the append-only CSV file
    pub csv_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: "./asap_baseball_transcripts.csv".to_string(),
        }
    }
}
