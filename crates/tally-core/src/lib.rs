//! # tally-core: Pure Business Logic for Tally
//!
//! This crate is the **heart** of Tally. It decides which receipts are
//! acceptable and how many points each one earns, as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Tally Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    tally-api (Axum)                             │   │
//! │  │    POST /receipts/process      GET /receipts/{id}/points        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tally-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │validation │  │  scoring  │  │   │
//! │  │   │  Receipt  │  │   Money   │  │ Validator │  │  R1 - R7  │  │   │
//! │  │   │   Item    │  │  (cents)  │  │  grammar  │  │ Breakdown │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    tally-store                                  │   │
//! │  │              id → points, opaque id generation                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Receipt, Item, ScoredReceipt)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Receipt grammar validation
//! - [`scoring`] - The seven points rules
//!
//! ## Example Usage
//!
//! ```rust
//! use tally_core::{scoring, Item, Receipt, ReceiptValidator};
//!
//! let receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-02".to_string(),
//!     purchase_time: "13:13".to_string(),
//!     items: vec![Item {
//!         short_description: "Pepsi - 12-oz".to_string(),
//!         price: "1.25".to_string(),
//!     }],
//!     total: "1.25".to_string(),
//! };
//!
//! let validator = ReceiptValidator::new().unwrap();
//! assert!(validator.validate(&receipt));
//!
//! // 6 (retailer) + 25 (quarter multiple)
//! assert_eq!(scoring::score(&receipt).unwrap(), 31);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod scoring;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, MoneyError, ValidationError};
pub use money::Money;
pub use scoring::{score, PointsBreakdown};
pub use types::*;
pub use validation::ReceiptValidator;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Layout accepted for `purchaseDate` (chrono format string).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Layout accepted for `purchaseTime` (chrono format string).
pub const TIME_FORMAT: &str = "%H:%M";
