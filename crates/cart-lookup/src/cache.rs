//! Lookup memoization.
//!
//! Only successful lookups are stored. Misses and failures are retried on
//! the next request for the same code, since a transport error says nothing
//! about whether the product exists.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::{ProductRecord, ProductSource};

/// Key-value store for product records, keyed by barcode.
pub trait ProductCache: Send + Sync {
    /// Return the cached record for `code`, if any.
    fn get(&self, code: &str) -> Option<ProductRecord>;

    /// Store `record` under `code`, replacing any previous entry.
    fn put(&self, code: &str, record: ProductRecord);

    /// Whether `code` has a cached record.
    fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }
}

/// Unbounded in-process cache. Entries never expire.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, ProductRecord>>,
}

impl MemoryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// A poisoned lock still guards a consistent map: every write is a single
// `insert`, so readers and writers recover the guard instead of panicking.
impl ProductCache for MemoryCache {
    fn get(&self, code: &str) -> Option<ProductRecord> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(code)
            .cloned()
    }

    fn put(&self, code: &str, record: ProductRecord) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(code.to_string(), record);
    }

    fn contains(&self, code: &str) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(code)
    }
}

// ── CachedLookup ───────────────────────────────────────────────────

/// Cache-first product lookup.
///
/// Failures are logged and reported as `None`; they never reach the caller.
/// Two concurrent misses for the same code may both hit the source; the
/// second `put` overwrites the first with an identical record.
#[derive(Debug)]
pub struct CachedLookup<S, C = MemoryCache> {
    source: S,
    cache: C,
}

impl<S: ProductSource> CachedLookup<S, MemoryCache> {
    /// Wrap `source` with a fresh in-memory cache.
    #[must_use]
    pub fn with_memory_cache(source: S) -> Self {
        Self::new(source, MemoryCache::new())
    }
}

impl<S: ProductSource, C: ProductCache> CachedLookup<S, C> {
    #[must_use]
    pub const fn new(source: S, cache: C) -> Self {
        Self { source, cache }
    }

    /// The backing cache.
    #[must_use]
    pub const fn cache(&self) -> &C {
        &self.cache
    }

    /// Look up `code`, consulting the cache first.
    pub async fn lookup(&self, code: &str) -> Option<ProductRecord> {
        if let Some(record) = self.cache.get(code) {
            tracing::debug!(code, "product cache hit");
            return Some(record);
        }

        match self.source.fetch_product(code).await {
            Ok(record) => {
                self.cache.put(code, record.clone());
                Some(record)
            }
            Err(error) if error.is_expected() => {
                tracing::debug!(code, %error, "no product record");
                None
            }
            Err(error) => {
                tracing::warn!(code, %error, "product lookup failed");
                None
            }
        }
    }
}
