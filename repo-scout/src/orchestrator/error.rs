//! Scraper error types.

/// Errors that can occur while building a [`Scraper`](super::Scraper).
#[derive(Debug, thiserror::Error)]
pub enum ScraperError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// HTTP client initialization errors.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
