//! Memoization of listings per input.
//!
//! The orchestrator consults a [`ListingCache`] before fetching anything, so
//! repeated requests for the same user or topic are answered from memory.
//! Only listings that finished without a fetch failure are stored.

mod clock;
mod policy;

pub use clock::{Clock, SystemClock};
pub use policy::ExpiryPolicy;

use crate::listing::Listing;
use crate::shape::ListingShape;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;
use tracing::debug;

/// Identifies a listing: its shape and the exact input string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub shape: ListingShape,
    pub input: String,
}

impl CacheKey {
    /// Creates a key for `input` listed with `shape`.
    pub fn new(shape: ListingShape, input: impl Into<String>) -> Self {
        Self {
            shape,
            input: input.into(),
        }
    }
}

/// Stores listings by key.
pub trait ListingCache: Send + Sync {
    /// Returns the cached listing, if present and fresh.
    fn get(&self, key: &CacheKey) -> Option<Listing>;

    /// Stores a listing, replacing any previous entry.
    fn insert(&self, key: CacheKey, listing: Listing);
}

/// A cache that never stores anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCache;

impl ListingCache for NoCache {
    fn get(&self, _key: &CacheKey) -> Option<Listing> {
        None
    }

    fn insert(&self, _key: CacheKey, _listing: Listing) {}
}

struct CachedListing {
    stored_at: Instant,
    listing: Listing,
}

/// An in-process cache with a configurable expiry policy.
pub struct MemoryCache {
    entries: Mutex<HashMap<CacheKey, CachedListing>>,
    policy: ExpiryPolicy,
    clock: Arc<dyn Clock>,
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new(ExpiryPolicy::Never)
    }
}

impl MemoryCache {
    /// Creates a cache using the system clock.
    pub fn new(policy: ExpiryPolicy) -> Self {
        Self::with_clock(policy, Arc::new(SystemClock))
    }

    /// Creates a cache with a custom clock.
    pub fn with_clock(policy: ExpiryPolicy, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            policy,
            clock,
        }
    }

    /// Number of stored entries, including expired ones not yet evicted.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ListingCache for MemoryCache {
    fn get(&self, key: &CacheKey) -> Option<Listing> {
        let now = self.clock.now();
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);

        let expired = self.policy.is_expired(entries.get(key)?.stored_at, now);
        if expired {
            debug!(shape = %key.shape, input = %key.input, "Evicting expired listing");
            entries.remove(key);
            return None;
        }

        entries.get(key).map(|entry| entry.listing.clone())
    }

    fn insert(&self, key: CacheKey, listing: Listing) {
        let stored_at = self.clock.now();
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, CachedListing { stored_at, listing });
    }
}
