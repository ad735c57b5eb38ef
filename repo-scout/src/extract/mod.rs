//! Record extraction from listing pages.
//!
//! Both listing shapes share one walk: select the containers, resolve each
//! container's title, look up the optional fields, and apply defaults.
//! Containers without the anchors their shape requires are dropped.

mod rule;

use crate::counts::parse_count;
use crate::record::RepositoryRecord;
use crate::shape::ListingShape;
use rule::ExtractionRule;
use scraper::Html;
use tracing::debug;

/// Result of extracting one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Number of containers matched on the page, usable or not.
    pub containers: usize,

    /// Records for the usable containers, in document order. Never indexed.
    pub records: Vec<RepositoryRecord>,
}

impl Extraction {
    /// Number of containers that were dropped for lacking a usable title.
    pub fn skipped(&self) -> usize {
        self.containers - self.records.len()
    }
}

/// Extracts repository records from a parsed listing page.
///
/// # Arguments
///
/// * `document` - Parsed HTML of one listing page
/// * `shape` - Which listing rules to apply
/// * `host` - Absolute host prefix joined with each relative link, without a trailing `/`
pub fn extract(document: &Html, shape: ListingShape, host: &str) -> Extraction {
    let rule = ExtractionRule::for_shape(shape);
    let mut extraction = Extraction::default();

    for container in document.select(&rule.container) {
        extraction.containers += 1;

        let Some(title) = rule.title.resolve(container) else {
            continue;
        };

        let description = rule.description.text(container);
        let stars = parse_count(rule.stars.text(container).as_deref());

        extraction.records.push(RepositoryRecord::new(
            title.name,
            format!("{host}{}", title.href),
            description,
            stars,
        ));
    }

    debug!(
        %shape,
        containers = extraction.containers,
        records = extraction.records.len(),
        skipped = extraction.skipped(),
        "Extracted listing page"
    );
    extraction
}
