//! Repository records produced by listing extraction.

use serde::Serialize;

/// Description used when a listing entry has no description element.
pub const NO_DESCRIPTION: &str = "No description";

/// One repository entry extracted from a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryRecord {
    /// 1-based position in discovery order. Only set for user listings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,

    /// Display name, e.g. `"Hello-World"` or `"octocat/Hello-World"`.
    pub name: String,

    /// Absolute URL of the repository.
    pub url: String,

    /// Free-text description, or [`NO_DESCRIPTION`].
    pub description: String,

    /// Star count; `0` when absent or unparseable.
    pub stars: u64,
}

impl RepositoryRecord {
    /// Creates a record without an index.
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        description: Option<String>,
        stars: u64,
    ) -> Self {
        Self {
            index: None,
            name: name.into(),
            url: url.into(),
            description: description.unwrap_or_else(|| NO_DESCRIPTION.to_string()),
            stars,
        }
    }

    /// Returns the record tagged with a discovery index.
    #[must_use]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_description_uses_sentinel() {
        let record = RepositoryRecord::new("repo", "https://github.com/user/repo", None, 0);
        assert_eq!(record.description, NO_DESCRIPTION);
        assert_eq!(record.index, None);
    }

    #[test]
    fn serializes_without_absent_index() {
        let record = RepositoryRecord::new("a/b", "https://github.com/a/b", None, 3);
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("index").is_none());

        let json = serde_json::to_value(record.with_index(7)).unwrap();
        assert_eq!(json["index"], 7);
    }
}
