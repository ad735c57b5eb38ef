//! Cache expiry policies.

use std::time::{Duration, Instant};

/// When a cached listing stops being served.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpiryPolicy {
    /// Entries live for the whole process.
    #[default]
    Never,
    /// Entries expire once they are older than the given age.
    After(Duration),
}

impl ExpiryPolicy {
    /// Returns true if an entry stored at `stored_at` is stale at `now`.
    pub fn is_expired(&self, stored_at: Instant, now: Instant) -> bool {
        match self {
            Self::Never => false,
            Self::After(max_age) => now.saturating_duration_since(stored_at) >= *max_age,
        }
    }
}
