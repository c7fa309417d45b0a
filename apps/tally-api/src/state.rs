//! Shared application state.
//!
//! ## Processing Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Receipt ──► validate ──► score ──► next_id ──► store.insert ──► id    │
//! │                 │            │                       │                  │
//! │                 ▼            ▼                       ▼                  │
//! │          InvalidReceipt  InvalidReceipt          Internal               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing is stored unless every earlier stage succeeded.

use std::sync::Arc;

use tally_core::{score, CoreResult, Receipt, ReceiptValidator, ScoredReceipt};
use tally_store::{IdGenerator, MemoryStore, ReceiptStore, UuidGenerator};
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    validator: Arc<ReceiptValidator>,
    store: Arc<dyn ReceiptStore>,
    ids: Arc<dyn IdGenerator>,
}

impl AppState {
    pub fn new(
        validator: ReceiptValidator,
        store: Arc<dyn ReceiptStore>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            validator: Arc::new(validator),
            store,
            ids,
        }
    }

    /// State backed by a sharded in-memory store and UUID v4 ids.
    pub fn in_memory(shards: usize) -> CoreResult<Self> {
        Ok(Self::new(
            ReceiptValidator::new()?,
            Arc::new(MemoryStore::with_shards(shards)),
            Arc::new(UuidGenerator),
        ))
    }

    /// Validates, scores and stores a receipt, returning its new id.
    pub fn process(&self, receipt: &Receipt) -> ApiResult<ScoredReceipt> {
        if let Err(e) = self.validator.check(receipt) {
            debug!(field = e.field(), error = %e, "Receipt rejected");
            return Err(ApiError::InvalidReceipt(e.to_string()));
        }

        let points = score(receipt).map_err(|e| {
            debug!(error = %e, "Receipt could not be scored");
            ApiError::from(e)
        })?;

        let id = self.ids.next_id();
        self.store.insert(&id, points)?;

        info!(id = %id, points, "Receipt processed");
        Ok(ScoredReceipt { id, points })
    }

    /// Looks up the points awarded to a previously processed receipt.
    pub fn points(&self, id: &str) -> ApiResult<u64> {
        self.store.get(id).ok_or_else(|| {
            debug!(id = %id, "Unknown receipt id");
            ApiError::NotFound(id.to_string())
        })
    }

    /// Number of receipts processed so far.
    pub fn receipt_count(&self) -> usize {
        self.store.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::Item;

    /// Hands out the same id every time.
    struct FixedIds;

    impl IdGenerator for FixedIds {
        fn next_id(&self) -> String {
            "fixed".to_string()
        }
    }

    fn target_receipt() -> Receipt {
        let item = |d: &str, p: &str| Item {
            short_description: d.to_string(),
            price: p.to_string(),
        };

        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![
                item("Mountain Dew 12PK", "6.49"),
                item("Emils Cheese Pizza", "12.25"),
                item("Knorr Creamy Chicken", "1.26"),
                item("Doritos Nacho Cheese", "3.35"),
                item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            total: "35.35".to_string(),
        }
    }

    #[test]
    fn test_process_then_lookup() {
        let state = AppState::in_memory(4).unwrap();

        let scored = state.process(&target_receipt()).unwrap();
        assert_eq!(scored.points, 28);
        assert_eq!(state.points(&scored.id).unwrap(), 28);
        assert_eq!(state.receipt_count(), 1);
    }

    #[test]
    fn test_invalid_receipt_is_not_stored() {
        let state = AppState::in_memory(4).unwrap();

        let mut receipt = target_receipt();
        receipt.items.clear();

        assert!(matches!(
            state.process(&receipt),
            Err(ApiError::InvalidReceipt(_))
        ));
        assert_eq!(state.receipt_count(), 0);
    }

    #[test]
    fn test_unknown_id() {
        let state = AppState::in_memory(4).unwrap();
        assert!(matches!(state.points("nope"), Err(ApiError::NotFound(_))));
    }

    #[test]
    fn test_id_collision_is_internal_error() {
        let state = AppState::new(
            ReceiptValidator::new().unwrap(),
            Arc::new(MemoryStore::new()),
            Arc::new(FixedIds),
        );

        assert_eq!(state.process(&target_receipt()).unwrap().id, "fixed");
        assert!(matches!(
            state.process(&target_receipt()),
            Err(ApiError::Internal(_))
        ));
        assert_eq!(state.points("fixed").unwrap(), 28);
    }
}
