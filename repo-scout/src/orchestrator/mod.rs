//! Listing orchestration.
//!
//! [`Scraper`] picks the fetch, extraction and termination rules for each
//! listing shape and memoizes finished listings per input.

mod error;

pub use error::ScraperError;

use crate::cache::{CacheKey, ListingCache, MemoryCache};
use crate::config::ScraperConfig;
use crate::extract::extract;
use crate::fetch::{PageFetcher, ReqwestFetcher};
use crate::listing::Listing;
use crate::paginate::Paginator;
use crate::shape::ListingShape;
use std::sync::Arc;
use tracing::{info, info_span, warn, Instrument};

/// Builds the URL of a topic page.
pub fn topic_page_url(host: &str, topic: &str) -> String {
    format!("{host}/topics/{topic}")
}

/// Lists a user's or a topic's repositories.
pub struct Scraper {
    config: ScraperConfig,
    fetcher: Arc<dyn PageFetcher>,
    cache: Arc<dyn ListingCache>,
}

impl Scraper {
    /// Builds a scraper with a reqwest fetcher and a process-lifetime cache.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError`] if the configuration is invalid or the HTTP
    /// client cannot be built.
    pub fn new(config: ScraperConfig) -> Result<Self, ScraperError> {
        let config = config.validated()?;
        let fetcher = ReqwestFetcher::new(&config.user_agent)?;
        Ok(Self::with_parts(
            config,
            Arc::new(fetcher),
            Arc::new(MemoryCache::default()),
        ))
    }

    /// Builds a scraper from explicit collaborators.
    ///
    /// `config` is used as given; call [`ScraperConfig::validated`] first if
    /// it did not come from [`ScraperConfig::load`].
    pub fn with_parts(
        config: ScraperConfig,
        fetcher: Arc<dyn PageFetcher>,
        cache: Arc<dyn ListingCache>,
    ) -> Self {
        Self {
            config,
            fetcher,
            cache,
        }
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Lists every repository of `user`, following pages until one is empty.
    pub async fn scrape_user(&self, user: &str) -> Listing {
        let key = CacheKey::new(ListingShape::UserRepositories, user);
        if let Some(listing) = self.cached(&key) {
            return listing;
        }

        let listing = Paginator::new(self.fetcher.as_ref(), &self.config.host)
            .run(user)
            .await;
        self.remember(key, &listing);
        listing
    }

    /// Lists the repositories on the first page of `topic`.
    pub async fn scrape_topic(&self, topic: &str) -> Listing {
        let key = CacheKey::new(ListingShape::TopicRepositories, topic);
        if let Some(listing) = self.cached(&key) {
            return listing;
        }

        let span = info_span!("list_topic", topic);
        let listing = async {
            let mut listing = Listing::new(ListingShape::TopicRepositories, topic);
            let url = topic_page_url(&self.config.host, topic);

            match self.fetcher.fetch(&url).await {
                Ok(html) => {
                    listing.pages_fetched = 1;
                    listing.records = extract(
                        &html.document(),
                        ListingShape::TopicRepositories,
                        &self.config.host,
                    )
                    .records;
                    info!(count = listing.records.len(), "Topic listing finished");
                }
                Err(e) => {
                    warn!(error = %e, "Failed to retrieve topic page");
                    listing.failure = Some(e);
                }
            }
            listing
        }
        .instrument(span)
        .await;

        self.remember(key, &listing);
        listing
    }

    fn cached(&self, key: &CacheKey) -> Option<Listing> {
        let listing = self.cache.get(key)?;
        info!(shape = %key.shape, input = %key.input, "Serving cached listing");
        Some(listing)
    }

    fn remember(&self, key: CacheKey, listing: &Listing) {
        if listing.is_complete() {
            self.cache.insert(key, listing.clone());
        }
    }
}
