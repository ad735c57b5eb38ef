//! Paging through a user's repository list.
//!
//! Pages are fetched one at a time starting at page 1. Each page is
//! extracted with the user listing rules and its records are tagged from a
//! single running index. Paging ends when the stop predicate fires (by
//! default, on the first page with no repository containers) or when a
//! fetch fails.

use crate::extract::extract;
use crate::fetch::PageFetcher;
use crate::listing::Listing;
use crate::shape::ListingShape;
use tracing::{debug, info, info_span, warn, Instrument};

/// What a single page produced, handed to the stop predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    /// 1-based page number.
    pub page: u32,
    /// Repository containers matched on the page.
    pub containers: usize,
    /// Usable records extracted from those containers.
    pub records: usize,
}

/// Decides whether a page is the last one to collect.
///
/// The records of the page it fires on are still kept.
pub type StopPredicate = dyn Fn(&PageSummary) -> bool + Send + Sync;

/// Stops on the first page without repository containers.
pub fn stop_on_empty_page(summary: &PageSummary) -> bool {
    summary.containers == 0
}

/// Builds the URL of one page of a user's repository tab.
pub fn user_page_url(host: &str, user: &str, page: u32) -> String {
    format!("{host}/{user}?page={page}&tab=repositories")
}

/// Drives the user repository listing across pages.
pub struct Paginator<'a> {
    fetcher: &'a dyn PageFetcher,
    host: &'a str,
    stop: &'a StopPredicate,
}

impl<'a> Paginator<'a> {
    /// Creates a paginator that stops on the first empty page.
    pub fn new(fetcher: &'a dyn PageFetcher, host: &'a str) -> Self {
        Self {
            fetcher,
            host,
            stop: &stop_on_empty_page,
        }
    }

    /// Replaces the stop predicate.
    #[must_use]
    pub fn with_stop(mut self, stop: &'a StopPredicate) -> Self {
        self.stop = stop;
        self
    }

    /// Collects every page of `user`'s repositories.
    ///
    /// A failed fetch ends collection; records from earlier pages are kept
    /// and the failure is recorded on the returned [`Listing`].
    pub async fn run(&self, user: &str) -> Listing {
        let span = info_span!("list_user", user);

        async {
            let mut listing = Listing::new(ListingShape::UserRepositories, user);
            let mut next_index = 1usize;
            let mut page = 1u32;

            loop {
                let url = user_page_url(self.host, user, page);
                let html = match self.fetcher.fetch(&url).await {
                    Ok(html) => html,
                    Err(e) => {
                        warn!(page, error = %e, "Stopping after failed page fetch");
                        listing.failure = Some(e);
                        break;
                    }
                };
                listing.pages_fetched += 1;

                let extraction = extract(
                    &html.document(),
                    ListingShape::UserRepositories,
                    self.host,
                );
                let summary = PageSummary {
                    page,
                    containers: extraction.containers,
                    records: extraction.records.len(),
                };
                debug!(
                    page,
                    containers = summary.containers,
                    records = summary.records,
                    "Page extracted"
                );

                for record in extraction.records {
                    listing.records.push(record.with_index(next_index));
                    next_index += 1;
                }

                if (self.stop)(&summary) {
                    break;
                }
                page += 1;
            }

            info!(
                pages = listing.pages_fetched,
                count = listing.records.len(),
                failed = listing.failure.is_some(),
                "User listing finished"
            );
            listing
        }
        .instrument(span)
        .await
    }
}
