//! # Score Store
//!
//! In-memory map from [`ReceiptId`] to awarded [`Points`].
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Score Store Operations                               │
//! │                                                                         │
//! │  insert(points) ──► write lock ──► mint id ──► vacant? insert : retry  │
//! │                                                                         │
//! │  lookup(id)     ──► read lock  ──► copy points out                     │
//! │                                                                         │
//! │  NOTE: Each call holds the lock only for one map operation.            │
//! │        Readers run in parallel; a reader sees either nothing or the    │
//! │        complete value written by a finished insert.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The handle is cheap to clone (an `Arc` inside); clones share one map.
//! Entries are never updated or removed.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use receipt_core::Points;

use crate::id::ReceiptId;

/// Concurrent id → points map.
#[derive(Debug, Clone, Default)]
pub struct ScoreStore {
    scores: Arc<RwLock<HashMap<ReceiptId, Points>>>,
}

impl ScoreStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `points` under a freshly minted id and returns the id.
    ///
    /// Always succeeds. An id already in the map is never overwritten.
    pub fn insert(&self, points: Points) -> ReceiptId {
        let mut scores = self.write();
        loop {
            let id = ReceiptId::new();
            if let Entry::Vacant(entry) = scores.entry(id) {
                entry.insert(points);
                return id;
            }
        }
    }

    /// Returns the points stored under `id`, or `None` if it was never issued.
    pub fn lookup(&self, id: &ReceiptId) -> Option<Points> {
        self.read().get(id).copied()
    }

    /// Number of stored receipts.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Values are plain integers written in one step, so a panic elsewhere
    // cannot leave an entry half-written. Recover the guard instead of
    // propagating the poison.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<ReceiptId, Points>> {
        self.scores.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<ReceiptId, Points>> {
        self.scores.write().unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_insert_then_lookup() {
        let store = ScoreStore::new();
        assert!(store.is_empty());

        let id = store.insert(28);
        assert_eq!(store.lookup(&id), Some(28));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_lookup_unknown_id() {
        let store = ScoreStore::new();
        store.insert(5);
        assert_eq!(store.lookup(&ReceiptId::new()), None);
    }

    #[test]
    fn test_same_points_get_distinct_ids() {
        let store = ScoreStore::new();
        let a = store.insert(109);
        let b = store.insert(109);
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_large_points_not_truncated() {
        let store = ScoreStore::new();
        for points in [0, i32::MAX as Points + 1, u32::MAX as Points * 3, Points::MAX] {
            let id = store.insert(points);
            assert_eq!(store.lookup(&id), Some(points));
        }
    }

    #[test]
    fn test_clones_share_state() {
        let store = ScoreStore::new();
        let handle = store.clone();
        let id = handle.insert(42);
        assert_eq!(store.lookup(&id), Some(42));
    }

    #[test]
    fn test_concurrent_inserts_and_lookups() {
        const THREADS: u64 = 8;
        const PER_THREAD: u64 = 250;

        let store = ScoreStore::new();

        let issued: Vec<(ReceiptId, Points)> = thread::scope(|s| {
            let workers: Vec<_> = (0..THREADS)
                .map(|t| {
                    let store = &store;
                    s.spawn(move || {
                        (0..PER_THREAD)
                            .map(|i| {
                                let points = t * 1_000_000 + i;
                                let id = store.insert(points);
                                // Visible to this thread immediately
                                assert_eq!(store.lookup(&id), Some(points));
                                (id, points)
                            })
                            .collect::<Vec<_>>()
                    })
                })
                .collect();

            workers
                .into_iter()
                .flat_map(|w| w.join().unwrap())
                .collect()
        });

        let unique: HashSet<_> = issued.iter().map(|(id, _)| *id).collect();
        assert_eq!(unique.len(), (THREADS * PER_THREAD) as usize);
        assert_eq!(store.len(), unique.len());

        for (id, points) in issued {
            assert_eq!(store.lookup(&id), Some(points));
        }
    }
}
