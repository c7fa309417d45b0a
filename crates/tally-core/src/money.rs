//! # Money Module
//!
//! Provides the `Money` type for handling receipt amounts exactly.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Parsing "35.35" as a float and multiplying by 100 gives               │
//! │    3534.9999999999995  → a cent boundary decided by rounding mode      │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "35.35" is read digit by digit into 3535 cents                      │
//! │    Every rule that looks at an amount works on the integer             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//!
//! let total = Money::parse_amount("35.35").unwrap();
//! assert_eq!(total.cents(), 3535);
//! assert!(!total.is_whole_dollars());
//!
//! // NEVER do this:
//! // let bad = Money::from_float(35.35); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::MoneyError;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// Receipt amounts are never negative (the grammar has no sign), but the
/// inner value stays `i64` so intermediate arithmetic has headroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a receipt amount of the form `digits.dd`.
    ///
    /// Exactly two fraction digits are required and no sign is accepted, so
    /// the result is always exact. The only way a grammatical amount can fail
    /// here is an integer part too large for i64 cents.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// assert_eq!(Money::parse_amount("6.49").unwrap().cents(), 649);
    /// assert!(Money::parse_amount("6.5").is_err());
    /// assert!(Money::parse_amount("-1.00").is_err());
    /// ```
    pub fn parse_amount(s: &str) -> Result<Self, MoneyError> {
        let malformed = || MoneyError::Malformed(s.to_string());

        let (whole, frac) = s.split_once('.').ok_or_else(malformed)?;
        if whole.is_empty()
            || frac.len() != 2
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(malformed());
        }

        let overflow = || MoneyError::Overflow(s.to_string());
        let dollars: i64 = whole.parse().map_err(|_| overflow())?;
        let cents: i64 = frac.parse().map_err(|_| malformed())?;

        dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .map(Money)
            .ok_or_else(overflow)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the dollars portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// True when the amount has no cents (e.g. `$9.00`).
    #[inline]
    pub const fn is_whole_dollars(&self) -> bool {
        self.0 % 100 == 0
    }

    /// True when the amount is a multiple of `$0.25`.
    #[inline]
    pub const fn is_quarter_multiple(&self) -> bool {
        self.0 % 25 == 0
    }

    /// Multiplies by a fraction and rounds the result UP to a whole dollar.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// // $12.25 × 0.2 = 2.45 → 3
    /// assert_eq!(Money::from_cents(1225).ceil_dollars_of(1, 5), 3);
    /// // $10.00 × 0.2 = 2.00 → 2
    /// assert_eq!(Money::from_cents(1000).ceil_dollars_of(1, 5), 2);
    /// ```
    pub fn ceil_dollars_of(&self, numerator: i64, denominator: i64) -> i64 {
        // Widen so `cents * numerator` cannot overflow
        let scaled = self.0 as i128 * numerator as i128;
        let divisor = denominator as i128 * 100;
        let quotient = scaled / divisor;
        let rounded = if scaled % divisor > 0 { quotient + 1 } else { quotient };
        rounded as i64
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl FromStr for Money {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse_amount(s)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
