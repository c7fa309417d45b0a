//! # In-Memory Store
//!
//! Sharded in-memory implementation of [`ReceiptStore`].
//!
//! ## Thread Safety
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Sharded Locking                                      │
//! │                                                                         │
//! │  hash(id) % N ──► shard                                                │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐       ┌──────────────┐              │
//! │  │ RwLock<Map>  │ │ RwLock<Map>  │  ...  │ RwLock<Map>  │              │
//! │  │   shard 0    │ │   shard 1    │       │  shard N-1   │              │
//! │  └──────────────┘ └──────────────┘       └──────────────┘              │
//! │                                                                         │
//! │  • Readers of a shard never block each other                           │
//! │  • A writer only holds its own shard, briefly                          │
//! │  • Ids on different shards never contend                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::hash_map::{Entry, RandomState};
use std::collections::HashMap;
use std::hash::BuildHasher;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::ReceiptStore;

/// Default number of shards.
pub const DEFAULT_SHARDS: usize = 16;

/// In-memory receipt store, lives for the process lifetime.
#[derive(Debug)]
pub struct MemoryStore {
    shards: Vec<RwLock<HashMap<String, u64>>>,
    hasher: RandomState,
}

impl MemoryStore {
    /// Creates an empty store with [`DEFAULT_SHARDS`] shards.
    pub fn new() -> Self {
        Self::with_shards(DEFAULT_SHARDS)
    }

    /// Creates an empty store with `shards` shards (at least one).
    pub fn with_shards(shards: usize) -> Self {
        let shards = shards.max(1);
        MemoryStore {
            shards: (0..shards).map(|_| RwLock::new(HashMap::new())).collect(),
            hasher: RandomState::new(),
        }
    }

    /// Number of shards.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    fn shard(&self, id: &str) -> &RwLock<HashMap<String, u64>> {
        let index = self.hasher.hash_one(id) as usize % self.shards.len();
        &self.shards[index]
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptStore for MemoryStore {
    fn insert(&self, id: &str, points: u64) -> StoreResult<()> {
        let mut shard = self.shard(id).write();
        match shard.entry(id.to_string()) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists(id.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(points);
                debug!(id = %id, points, "Stored receipt points");
                Ok(())
            }
        }
    }

    fn get(&self, id: &str) -> Option<u64> {
        self.shard(id).read().get(id).copied()
    }

    fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.read().len()).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_insert_then_get() {
        let store = MemoryStore::new();
        assert!(store.is_empty());

        store.insert("a", 28).unwrap();
        store.insert("b", 109).unwrap();

        assert_eq!(store.get("a"), Some(28));
        assert_eq!(store.get("b"), Some(109));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_unknown_id_is_none_not_zero() {
        let store = MemoryStore::new();
        store.insert("a", 0).unwrap();

        assert_eq!(store.get("a"), Some(0));
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn test_insert_is_write_once() {
        let store = MemoryStore::new();
        store.insert("a", 28).unwrap();

        assert_eq!(
            store.insert("a", 99),
            Err(StoreError::AlreadyExists("a".to_string()))
        );
        assert_eq!(store.get("a"), Some(28));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_with_shards_clamps_to_one() {
        let store = MemoryStore::with_shards(0);
        assert_eq!(store.shard_count(), 1);

        store.insert("a", 1).unwrap();
        assert_eq!(store.get("a"), Some(1));
    }

    #[test]
    fn test_concurrent_inserts_and_reads() {
        let store = Arc::new(MemoryStore::with_shards(4));

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..250u64 {
                        let id = format!("{t}-{i}");
                        store.insert(&id, i).unwrap();
                        assert_eq!(store.get(&id), Some(i));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.len(), 2000);
        assert_eq!(store.get("7-249"), Some(249));
    }
}
