//! # tally-store: Receipt Store for Tally
//!
//! Keeps the points awarded to each accepted receipt, keyed by an opaque id.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tally Data Flow                                  │
//! │                                                                         │
//! │  POST /receipts/process                 GET /receipts/{id}/points      │
//! │       │ validate + score (tally-core)        │                          │
//! │       ▼                                      ▼                          │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     tally-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐         ┌──────────────────────────────┐   │   │
//! │  │   │  IdGenerator  │  id ──► │  ReceiptStore                │   │   │
//! │  │   │  (UUID v4)    │         │  insert(id, points)  once    │   │   │
//! │  │   └───────────────┘         │  get(id) → Option<points>    │   │   │
//! │  │                             │                              │   │   │
//! │  │                             │  MemoryStore: N shards,      │   │   │
//! │  │                             │  each RwLock<HashMap>        │   │   │
//! │  │                             └──────────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use tally_store::{IdGenerator, MemoryStore, ReceiptStore, UuidGenerator};
//!
//! let store = MemoryStore::new();
//! let id = UuidGenerator.next_id();
//!
//! store.insert(&id, 28).unwrap();
//! assert_eq!(store.get(&id), Some(28));
//! assert_eq!(store.get("unknown"), None);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod id;
pub mod memory;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use id::{IdGenerator, UuidGenerator};
pub use memory::MemoryStore;

// =============================================================================
// Receipt Store
// =============================================================================

/// An association of receipt ids to points.
///
/// ## Contract
/// - `insert` is write-once: a second insert for the same id fails with
///   [`StoreError::AlreadyExists`] and the first value stays.
/// - A `get` that starts after an `insert` returned sees that value.
/// - Ids are opaque; implementations must not interpret them.
pub trait ReceiptStore: Send + Sync {
    /// Stores the points for a new id.
    fn insert(&self, id: &str, points: u64) -> StoreResult<()>;

    /// Looks up the points for an id.
    fn get(&self, id: &str) -> Option<u64>;

    /// Number of stored receipts.
    fn len(&self) -> usize;

    /// True when nothing has been stored yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
