//! # Scoring Module
//!
//! Awards points to a receipt that has already passed validation.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule                    Award                                          │
//! │  ──────────────────────  ─────────────────────────────────────────────  │
//! │  R1 retailer             1 per ASCII letter or digit                    │
//! │  R2 round total          50 if total has no cents                       │
//! │  R3 quarter total        25 if total is a multiple of 0.25              │
//! │  R4 item pairs           5 per two items                                │
//! │  R5 descriptions         ceil(price × 0.2) per item whose trimmed       │
//! │                          description length is a positive multiple of 3 │
//! │  R6 odd day              6 if the purchase day is odd                   │
//! │  R7 afternoon            10 if purchased 14:00 - 15:59                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every rule is independent and works on exact integer cents. The total is
//! the plain sum of the seven contributions, see [`PointsBreakdown`].
//!
//! ## Usage
//! ```rust
//! use tally_core::{scoring, Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "M&M Corner Market".to_string(),
//!     purchase_date: "2022-03-20".to_string(),
//!     purchase_time: "14:33".to_string(),
//!     items: vec![
//!         Item { short_description: "Gatorade".to_string(), price: "2.25".to_string() };
//!         4
//!     ],
//!     total: "9.00".to_string(),
//! };
//!
//! let breakdown = scoring::breakdown(&receipt).unwrap();
//! assert_eq!(breakdown.retailer, 14);
//! assert_eq!(breakdown.round_total + breakdown.quarter_total, 75);
//! assert_eq!(breakdown.total(), 109);
//! ```

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Item, Receipt};
use crate::{DATE_FORMAT, TIME_FORMAT};

// =============================================================================
// Rule Constants
// =============================================================================

pub const ROUND_TOTAL_POINTS: u64 = 50;
pub const QUARTER_TOTAL_POINTS: u64 = 25;
pub const POINTS_PER_ITEM_PAIR: u64 = 5;
pub const ODD_DAY_POINTS: u64 = 6;
pub const AFTERNOON_POINTS: u64 = 10;

/// R5 multiplier as a fraction (0.2 = 1/5).
const DESCRIPTION_PRICE_FRACTION: (i64, i64) = (1, 5);

/// R7 window, half-open: `[14:00, 16:00)`.
const AFTERNOON_START_HOUR: u32 = 14;
const AFTERNOON_END_HOUR: u32 = 16;

// =============================================================================
// Points Breakdown
// =============================================================================

/// Per-rule point contributions for one receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub round_total: u64,
    pub quarter_total: u64,
    pub item_pairs: u64,
    pub descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Sum of all contributions, or `None` if it does not fit in a u64.
    pub fn checked_total(&self) -> Option<u64> {
        [
            self.retailer,
            self.round_total,
            self.quarter_total,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .try_fold(0u64, u64::checked_add)
    }

    /// Sum of all contributions, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.checked_total().unwrap_or(u64::MAX)
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Computes the points for a validated receipt.
///
/// Fails with [`CoreError::Computation`] only if an amount, date or time
/// cannot be parsed, which does not happen for receipts the validator
/// accepted unless an amount overflows i64 cents.
pub fn score(receipt: &Receipt) -> CoreResult<u64> {
    breakdown(receipt)?
        .checked_total()
        .ok_or_else(|| CoreError::computation("points", "total overflowed"))
}

/// Computes every rule's contribution separately.
pub fn breakdown(receipt: &Receipt) -> CoreResult<PointsBreakdown> {
    let total = parse_money("total", &receipt.total)?;

    Ok(PointsBreakdown {
        retailer: retailer_points(&receipt.retailer),
        round_total: round_total_points(total),
        quarter_total: quarter_total_points(total),
        item_pairs: item_pair_points(receipt.items.len()),
        descriptions: description_points(&receipt.items)?,
        odd_day: odd_day_points(&receipt.purchase_date)?,
        afternoon: afternoon_points(&receipt.purchase_time)?,
    })
}

// =============================================================================
// Rules
// =============================================================================

/// R1: one point per ASCII letter or digit in the retailer name.
pub fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

/// R2: 50 points if the total is a whole dollar amount.
pub fn round_total_points(total: Money) -> u64 {
    if total.is_whole_dollars() {
        ROUND_TOTAL_POINTS
    } else {
        0
    }
}

/// R3: 25 points if the total is a multiple of `0.25`.
pub fn quarter_total_points(total: Money) -> u64 {
    if total.is_quarter_multiple() {
        QUARTER_TOTAL_POINTS
    } else {
        0
    }
}

/// R4: 5 points for every two items.
pub fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * POINTS_PER_ITEM_PAIR
}

/// R5: for each item whose trimmed description length is a positive
/// multiple of 3, `ceil(price × 0.2)` points.
pub fn description_points(items: &[Item]) -> CoreResult<u64> {
    items.iter().try_fold(0u64, |acc, item| {
        let points = item_description_points(item)?;
        acc.checked_add(points)
            .ok_or_else(|| CoreError::computation("description bonus", "points overflowed"))
    })
}

/// R5 for a single item.
pub fn item_description_points(item: &Item) -> CoreResult<u64> {
    let length = item.short_description.trim().len();
    if length == 0 || length % 3 != 0 {
        return Ok(0);
    }

    let price = parse_money("item price", &item.price)?;
    let (numerator, denominator) = DESCRIPTION_PRICE_FRACTION;
    Ok(price.ceil_dollars_of(numerator, denominator).max(0) as u64)
}

/// R6: 6 points if the day of the purchase date is odd.
pub fn odd_day_points(purchase_date: &str) -> CoreResult<u64> {
    let date = NaiveDate::parse_from_str(purchase_date, DATE_FORMAT)
        .map_err(|e| CoreError::computation("purchase day", e.to_string()))?;

    Ok(if date.day() % 2 == 1 { ODD_DAY_POINTS } else { 0 })
}

/// R7: 10 points if the purchase hour is 14 or 15.
pub fn afternoon_points(purchase_time: &str) -> CoreResult<u64> {
    let time = NaiveTime::parse_from_str(purchase_time, TIME_FORMAT)
        .map_err(|e| CoreError::computation("purchase time", e.to_string()))?;

    let hour = time.hour();
    Ok(if (AFTERNOON_START_HOUR..AFTERNOON_END_HOUR).contains(&hour) {
        AFTERNOON_POINTS
    } else {
        0
    })
}

fn parse_money(rule: &'static str, amount: &str) -> CoreResult<Money> {
    Money::parse_amount(amount).map_err(|e| CoreError::computation(rule, e.to_string()))
}

// =============================================================================
// Unit Tests
// =============================================================================
