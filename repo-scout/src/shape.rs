//! Listing shapes supported by the extractor.

use serde::Serialize;
use std::fmt;

/// Which kind of listing page is being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingShape {
    /// A user's repository tab, paged with `?page=N`.
    UserRepositories,
    /// A topic page; a single page of article cards.
    TopicRepositories,
}

impl ListingShape {
    /// Whether records of this shape carry a discovery index.
    pub fn is_indexed(self) -> bool {
        matches!(self, Self::UserRepositories)
    }

    /// Table column names for this shape, in output order.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Self::UserRepositories => &[
                "Index",
                "Repository Name",
                "Repository URL",
                "Description",
                "Stars",
            ],
            Self::TopicRepositories => {
                &["Repository Name", "Repository URL", "Description", "Stars"]
            }
        }
    }
}

impl fmt::Display for ListingShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserRepositories => f.write_str("user"),
            Self::TopicRepositories => f.write_str("topic"),
        }
    }
}
