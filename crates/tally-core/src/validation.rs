//! # Validation Module
//!
//! Structural validation of submitted receipts.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP extractor (tally-api)                                   │
//! │  ├── JSON syntax                                                       │
//! │  └── Field presence and types (serde)                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── retailer / description / amount grammar                           │
//! │  ├── calendar date, 24-hour time                                       │
//! │  └── at least one item                                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: scoring                                                      │
//! │  └── exact amount parsing (can still overflow)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A receipt is accepted only if every check passes. The first failing
//! check is reported as a [`ValidationError`] for logging; HTTP clients only
//! learn that the receipt was invalid.
//!
//! ## Usage
//! ```rust,no_run
//! use tally_core::{Receipt, ReceiptValidator};
//!
//! # fn receipt() -> Receipt { unimplemented!() }
//! // Build once at startup, share across requests
//! let validator = ReceiptValidator::new().unwrap();
//!
//! if !validator.validate(&receipt()) {
//!     // reject
//! }
//! ```

use chrono::{NaiveDate, NaiveTime};
use regex::{Regex, RegexBuilder};

use crate::error::{CoreResult, ValidationError};
use crate::types::{Item, Receipt};
use crate::{DATE_FORMAT, TIME_FORMAT};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Grammar
// =============================================================================

/// Word characters, whitespace, hyphen and ampersand.
pub const RETAILER_PATTERN: &str = r"^[\w\s&-]+$";

/// Word characters, whitespace and hyphen. No ampersand.
pub const DESCRIPTION_PATTERN: &str = r"^[\w\s-]+$";

/// One or more digits, a point, exactly two digits.
pub const AMOUNT_PATTERN: &str = r"^\d+\.\d{2}$";

const DATE_SHAPE_PATTERN: &str = r"^\d{4}-\d{2}-\d{2}$";
const TIME_SHAPE_PATTERN: &str = r"^\d{2}:\d{2}$";

/// Compiles a grammar pattern in ASCII mode: `\w` is `[A-Za-z0-9_]`, `\s`
/// is ASCII whitespace and `\d` is `[0-9]`.
fn compile(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).unicode(false).build()
}

// =============================================================================
// Receipt Validator
// =============================================================================

/// Checks receipts against the field grammar.
///
/// All patterns are compiled once in [`ReceiptValidator::new`]; the validator
/// is immutable afterwards and can be shared between threads.
///
/// ## Checks (in order)
/// ```text
/// retailer       [\w\s&-]+
/// purchaseDate   YYYY-MM-DD and a real calendar date
/// purchaseTime   HH:MM, 00:00 - 23:59
/// items          at least one
/// items[i]       shortDescription [\w\s-]+, price \d+\.\d{2}
/// total          \d+\.\d{2}
/// ```
#[derive(Debug, Clone)]
pub struct ReceiptValidator {
    retailer: Regex,
    description: Regex,
    amount: Regex,
    date_shape: Regex,
    time_shape: Regex,
}

impl ReceiptValidator {
    /// Compiles the grammar.
    pub fn new() -> CoreResult<Self> {
        Ok(ReceiptValidator {
            retailer: compile(RETAILER_PATTERN)?,
            description: compile(DESCRIPTION_PATTERN)?,
            amount: compile(AMOUNT_PATTERN)?,
            date_shape: compile(DATE_SHAPE_PATTERN)?,
            time_shape: compile(TIME_SHAPE_PATTERN)?,
        })
    }

    /// Returns true if the receipt passes every check.
    pub fn validate(&self, receipt: &Receipt) -> bool {
        self.check(receipt).is_ok()
    }

    /// Runs every check and returns the first failure.
    pub fn check(&self, receipt: &Receipt) -> ValidationResult<()> {
        self.check_retailer(&receipt.retailer)?;
        self.check_purchase_date(&receipt.purchase_date)?;
        self.check_purchase_time(&receipt.purchase_time)?;

        if receipt.items.is_empty() {
            return Err(ValidationError::Empty {
                field: "items".to_string(),
            });
        }

        for (index, item) in receipt.items.iter().enumerate() {
            self.check_item(index, item)?;
        }

        self.check_amount("total", &receipt.total)
    }

    /// Validates the retailer name.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::ReceiptValidator;
    ///
    /// let validator = ReceiptValidator::new().unwrap();
    /// assert!(validator.check_retailer("M&M Corner Market").is_ok());
    /// assert!(validator.check_retailer("").is_err());
    /// assert!(validator.check_retailer("Target!").is_err());
    /// ```
    pub fn check_retailer(&self, retailer: &str) -> ValidationResult<()> {
        if !self.retailer.is_match(retailer) {
            return Err(ValidationError::invalid(
                "retailer",
                "must contain only letters, numbers, underscores, spaces, hyphens and ampersands",
            ));
        }
        Ok(())
    }

    /// Validates a purchase date (`YYYY-MM-DD`, real calendar date).
    pub fn check_purchase_date(&self, date: &str) -> ValidationResult<()> {
        if !self.date_shape.is_match(date) {
            return Err(ValidationError::invalid("purchaseDate", "must be YYYY-MM-DD"));
        }

        NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map_err(|e| ValidationError::invalid("purchaseDate", e.to_string()))?;

        Ok(())
    }

    /// Validates a purchase time (24-hour `HH:MM`).
    pub fn check_purchase_time(&self, time: &str) -> ValidationResult<()> {
        if !self.time_shape.is_match(time) {
            return Err(ValidationError::invalid("purchaseTime", "must be HH:MM"));
        }

        NaiveTime::parse_from_str(time, TIME_FORMAT)
            .map_err(|e| ValidationError::invalid("purchaseTime", e.to_string()))?;

        Ok(())
    }

    /// Validates a short item description.
    pub fn check_description(&self, description: &str) -> ValidationResult<()> {
        if !self.description.is_match(description) {
            return Err(ValidationError::invalid(
                "shortDescription",
                "must contain only letters, numbers, underscores, spaces and hyphens",
            ));
        }
        Ok(())
    }

    /// Validates an amount string such as a price or the total.
    pub fn check_amount(&self, field: &str, amount: &str) -> ValidationResult<()> {
        if !self.amount.is_match(amount) {
            return Err(ValidationError::invalid(field, "must look like 12.34"));
        }
        Ok(())
    }

    fn check_item(&self, index: usize, item: &Item) -> ValidationResult<()> {
        self.check_description(&item.short_description)
            .map_err(|e| match e {
                ValidationError::InvalidFormat { reason, .. } => {
                    ValidationError::invalid(format!("items[{index}].shortDescription"), reason)
                }
                other => other,
            })?;
        self.check_amount(&format!("items[{index}].price"), &item.price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> ReceiptValidator {
        ReceiptValidator::new().unwrap()
    }

    fn item(description: &str, price: &str) -> Item {
        Item {
            short_description: description.to_string(),
            price: price.to_string(),
        }
    }

    fn receipt() -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![
                item("Mountain Dew 12PK", "6.49"),
                item("Emils Cheese Pizza", "12.25"),
            ],
            total: "18.74".to_string(),
        }
    }

    #[test]
    fn test_valid_receipt() {
        let v = validator();
        assert!(v.validate(&receipt()));
        assert!(v.check(&receipt()).is_ok());
    }

    #[test]
    fn test_validate_retailer() {
        let v = validator();

        assert!(v.check_retailer("Target").is_ok());
        assert!(v.check_retailer("M&M Corner Market").is_ok());
        assert!(v.check_retailer("Walgreens_24-7").is_ok());
        assert!(v.check_retailer("7 Eleven").is_ok());

        assert!(v.check_retailer("").is_err());
        assert!(v.check_retailer("Target!").is_err());
        assert!(v.check_retailer("Ben's").is_err());
        assert!(v.check_retailer("Café").is_err());
    }

    #[test]
    fn test_ampersand_allowed_for_retailer_only() {
        let v = validator();

        let mut r = receipt();
        r.retailer = "M&M Corner Market".to_string();
        assert!(v.validate(&r));

        r.items[0].short_description = "Salt & Pepper".to_string();
        let err = v.check(&r).unwrap_err();
        assert_eq!(err.field(), "items[0].shortDescription");
        assert!(!v.validate(&r));
    }

    #[test]
    fn test_validate_description() {
        let v = validator();

        assert!(v.check_description("Pepsi - 12-oz").is_ok());
        assert!(v.check_description("   Klarbrunn 12-PK 12 FL OZ  ").is_ok());
        assert!(v.check_description("snake_case").is_ok());

        assert!(v.check_description("").is_err());
        assert!(v.check_description("Salt & Pepper").is_err());
        assert!(v.check_description("Milk (2%)").is_err());
    }

    #[test]
    fn test_validate_amount() {
        let v = validator();

        assert!(v.check_amount("price", "0.00").is_ok());
        assert!(v.check_amount("price", "3.50").is_ok());
        assert!(v.check_amount("price", "1234.56").is_ok());

        for bad in ["", "3", "3.5", "3.500", "1.5", "1.500", "-1.00", "+1.00", ".50", "3.50 "] {
            assert!(v.check_amount("price", bad).is_err(), "{bad:?} should fail");
        }
    }

    #[test]
    fn test_validate_purchase_date() {
        let v = validator();

        assert!(v.check_purchase_date("2022-01-01").is_ok());
        assert!(v.check_purchase_date("2024-02-29").is_ok());

        assert!(v.check_purchase_date("2022-13-01").is_err());
        assert!(v.check_purchase_date("2023-02-29").is_err());
        assert!(v.check_purchase_date("2022-04-31").is_err());
        assert!(v.check_purchase_date("2022-1-1").is_err());
        assert!(v.check_purchase_date("2022/01/01").is_err());
        assert!(v.check_purchase_date("01-01-2022").is_err());
        assert!(v.check_purchase_date("20220101").is_err());
        assert!(v.check_purchase_date("").is_err());
    }

    #[test]
    fn test_validate_purchase_time() {
        let v = validator();

        assert!(v.check_purchase_time("00:00").is_ok());
        assert!(v.check_purchase_time("13:01").is_ok());
        assert!(v.check_purchase_time("23:59").is_ok());

        assert!(v.check_purchase_time("24:00").is_err());
        assert!(v.check_purchase_time("12:60").is_err());
        assert!(v.check_purchase_time("1:01").is_err());
        assert!(v.check_purchase_time("13:01:00").is_err());
        assert!(v.check_purchase_time("01:01 PM").is_err());
        assert!(v.check_purchase_time("13:01Z").is_err());
        assert!(v.check_purchase_time("").is_err());
    }

    #[test]
    fn test_empty_items_rejected() {
        let v = validator();
        let mut r = receipt();
        r.items.clear();

        assert_eq!(
            v.check(&r),
            Err(ValidationError::Empty {
                field: "items".to_string()
            })
        );
    }

    #[test]
    fn test_any_bad_field_rejects_whole_receipt() {
        let v = validator();

        let mut r = receipt();
        r.total = "18.7".to_string();
        assert_eq!(v.check(&r).unwrap_err().field(), "total");

        let mut r = receipt();
        r.items[1].price = "12.2".to_string();
        assert_eq!(v.check(&r).unwrap_err().field(), "items[1].price");

        let mut r = receipt();
        r.purchase_time = "25:00".to_string();
        assert_eq!(v.check(&r).unwrap_err().field(), "purchaseTime");

        let mut r = receipt();
        r.purchase_date = "2022-02-30".to_string();
        assert_eq!(v.check(&r).unwrap_err().field(), "purchaseDate");
    }
}
