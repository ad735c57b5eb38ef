//! Scraper settings deserialization.

use serde::Deserialize;
use std::path::PathBuf;

/// Settings for a scraping session, parsed from `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct ScraperConfig {
    /// Scheme and host that listing URLs and repository links are built on.
    pub host: String,

    /// `User-Agent` header sent with every request.
    pub user_agent: String,

    /// Directory CSV exports are written to.
    pub output_dir: PathBuf,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            user_agent: default_user_agent(),
            output_dir: PathBuf::from("."),
        }
    }
}

fn default_host() -> String {
    "https://github.com".to_string()
}

fn default_user_agent() -> String {
    concat!("repo-scout/", env!("CARGO_PKG_VERSION")).to_string()
}
