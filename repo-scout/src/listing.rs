//! The outcome of one listing invocation.

use crate::fetch::FetchError;
use crate::record::RepositoryRecord;
use crate::shape::ListingShape;

/// Records collected for one user or topic, plus how collection ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// Listing shape the records were extracted with.
    pub shape: ListingShape,

    /// The user name or topic slug that was listed.
    pub input: String,

    /// Records in page order, then document order.
    pub records: Vec<RepositoryRecord>,

    /// Number of pages fetched successfully.
    pub pages_fetched: u32,

    /// Set when a fetch failed and collection stopped early.
    pub failure: Option<FetchError>,
}

/// How a listing ended, as reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingStatus {
    /// All pages were fetched and at least one record was found.
    Complete,
    /// All pages were fetched but nothing was found.
    Empty,
    /// A fetch failed; records from earlier pages may still be present.
    Failed,
}

impl Listing {
    /// Creates an empty listing for `input`.
    pub fn new(shape: ListingShape, input: impl Into<String>) -> Self {
        Self {
            shape,
            input: input.into(),
            records: Vec::new(),
            pages_fetched: 0,
            failure: None,
        }
    }

    /// Returns the listing status.
    #[must_use]
    pub fn status(&self) -> ListingStatus {
        if self.failure.is_some() {
            ListingStatus::Failed
        } else if self.records.is_empty() {
            ListingStatus::Empty
        } else {
            ListingStatus::Complete
        }
    }

    /// Returns true if no fetch failed.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}
