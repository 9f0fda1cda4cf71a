//! In-memory entry store.
//!
//! This is the only storage backend: a single `Vec<Entry>` guarded by one
//! mutex. Every operation takes the lock for exactly its read-modify-write
//! section and releases it before any encoding work. The lock is synchronous
//! and is never held across an await point.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{EntryStore, SortKey};
use crate::models::Entry;

/// In-memory entry store.
///
/// Cloning is cheap and shares the underlying collection; the server hands
/// one instance to the router and keeps using it from every request task.
///
/// The collection keeps insertion order. Sorted listings sort a private
/// copy, so reads never reorder the stored entries.
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<Vec<Entry>>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove all entries. Test helper.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

#[async_trait]
impl EntryStore for MemoryStore {
    async fn append(&self, entry: Entry) {
        self.entries.lock().push(entry);
    }

    async fn sorted_by(&self, key: SortKey) -> Vec<Entry> {
        // Copy out under the lock, sort the copy outside it.
        let mut entries = self.entries.lock().clone();
        match key {
            SortKey::Forename => entries.sort_by(|a, b| a.forename.cmp(&b.forename)),
            SortKey::Surname => entries.sort_by(|a, b| a.surname.cmp(&b.surname)),
        }
        entries
    }

    async fn search(&self, term: &str) -> Vec<Entry> {
        let entries = self.entries.lock();
        let mut matches = Vec::new();
        for entry in entries.iter() {
            // One push per matching field: an entry matching in both
            // fields appears twice.
            if entry.forename.contains(term) {
                matches.push(entry.clone());
            }
            if entry.surname.contains(term) {
                matches.push(entry.clone());
            }
        }
        matches
    }

    async fn delete_matching(&self, forename: &str, surname: &str) -> usize {
        let mut entries = self.entries.lock();
        let before = entries.len();
        entries.retain(|entry| entry.forename != forename || entry.surname != surname);
        before - entries.len()
    }

    async fn len(&self) -> usize {
        self.entries.lock().len()
    }
}
