//! Entry storage layer.
//!
//! This module defines the [`EntryStore`] trait, the abstract interface the
//! HTTP layer is written against, and provides the in-memory implementation
//! in [`memory`]. Handlers receive the store as `Arc<dyn EntryStore>`, so a
//! different backend can be swapped in without touching them, and tests can
//! construct an isolated store per case.

pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::models::Entry;

/// Sort key for entry listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Sort by first name.
    Forename,
    /// Sort by last name.
    Surname,
}

/// Storage interface for phonebook entries.
///
/// All operations are total: they never fail on their own. Request decoding
/// and every other error path live in the HTTP layer.
///
/// # Thread Safety
/// Implementations must be `Send + Sync`; the store is shared across all
/// request tasks.
#[async_trait]
pub trait EntryStore: Send + Sync {
    /// Append an entry to the end of the collection.
    ///
    /// No validation, no dedup. Insertion order among equal sort keys is
    /// preserved for later stable sorts.
    async fn append(&self, entry: Entry);

    /// Return a snapshot of all entries sorted ascending by the given key.
    ///
    /// The sort is stable: entries with equal keys keep their insertion
    /// order. The stored collection itself is never reordered by this call.
    async fn sorted_by(&self, key: SortKey) -> Vec<Entry>;

    /// Return all entries whose forename or surname contains `term`, in
    /// current collection order.
    ///
    /// Matching is a case-sensitive substring check, applied to each field
    /// independently: an entry containing the term in both fields appears
    /// twice in the result. Does not mutate the collection.
    async fn search(&self, term: &str) -> Vec<Entry>;

    /// Remove every entry whose forename and surname both equal the given
    /// values.
    ///
    /// Non-matching entries keep their relative order. The rewrite is
    /// atomic; no caller can observe a partially filtered collection.
    ///
    /// # Returns
    /// The number of entries removed. Zero is not an error.
    async fn delete_matching(&self, forename: &str, surname: &str) -> usize;

    /// Number of entries currently stored.
    async fn len(&self) -> usize;
}
