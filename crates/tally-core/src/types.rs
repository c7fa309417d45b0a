//! # Domain Types
//!
//! Receipt types exchanged with clients.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐   ┌─────────────────┐  │
//! │  │    Receipt      │ 1    n │      Item       │   │  ScoredReceipt  │  │
//! │  │  ─────────────  │───────►│  ─────────────  │   │  ─────────────  │  │
//! │  │  retailer       │        │  description    │   │  id (opaque)    │  │
//! │  │  purchase_date  │        │  price          │   │  points         │  │
//! │  │  purchase_time  │        └─────────────────┘   └─────────────────┘  │
//! │  │  total          │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Receipt fields are kept as the raw strings the client sent. Nothing is
//! trusted until [`ReceiptValidator`](crate::ReceiptValidator) has accepted
//! the whole receipt.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Receipt
// =============================================================================

/// A submitted purchase receipt.
///
/// Lives only for the duration of one validate + score pass; it is never
/// stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Retailer or store name.
    pub retailer: String,

    /// Purchase date as `YYYY-MM-DD`.
    pub purchase_date: String,

    /// Purchase time as 24-hour `HH:MM`.
    pub purchase_time: String,

    /// Purchased items, in receipt order.
    pub items: Vec<Item>,

    /// Total paid, e.g. `"35.35"`.
    pub total: String,
}

// =============================================================================
// Item
// =============================================================================

/// A line item on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Short product description.
    pub short_description: String,

    /// Price paid, e.g. `"6.49"`.
    pub price: String,
}

// =============================================================================
// Scored Receipt
// =============================================================================

/// The result of accepting a receipt: an opaque id and its points.
///
/// Created exactly once per accepted submission and never changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoredReceipt {
    pub id: String,
    #[ts(type = "number")]
    pub points: u64,
}

// =============================================================================
// Unit Tests
// =============================================================================
