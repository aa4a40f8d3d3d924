//! Configuration module for asap-scrape
//!
//! Handles loading, parsing, and validating TOML configuration files. All
//! sections have defaults, so a missing config file means "scrape the
//! baseball category with an 800ms delay, resuming from the existing CSV".

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, OutputConfig, SiteConfig, UserAgentConfig};

// Re-export parser functions
pub use parser::{default_config, load_config};
