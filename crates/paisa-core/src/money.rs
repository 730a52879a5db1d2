//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  A sales report that sums thousands of line subtotals as floats    │
//! │  will eventually print a total that disagrees with the bills.      │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Paise                                        │
//! │    ₹12.50 is stored as 1250 (i64). Sums are exact, always.          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use paisa_core::money::Money;
//!
//! let price = Money::from_paise(1250); // ₹12.50
//! let line = price * 3;                // ₹37.50
//! assert_eq!(line.fixed2(), "37.50");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (paise).
///
/// ## Design Decisions
/// - **i64 (signed)**: allows negative intermediate values (corrections)
/// - **Single-field tuple struct**: zero-cost abstraction over i64
/// - **Serde as plain integer**: invoices persist paise, never floats
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use paisa_core::money::Money;
    ///
    /// let price = Money::from_paise(1250); // ₹12.50
    /// assert_eq!(price.paise(), 1250);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Formats the value with exactly two decimal places and no currency
    /// symbol, e.g. `1250` → `"12.50"`.
    ///
    /// This is the format used in CSV exports and report rows.
    pub fn fixed2(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }

    /// Parses a human-entered or imported price string into Money.
    ///
    /// ## Rules
    /// - Every character except ASCII digits and `.` is stripped first, so
    ///   currency symbols and thousands separators are tolerated:
    ///   `"₹12.50"` → ₹12.50, `"1,000"` → ₹1000.00
    /// - At most two fractional digits are kept; anything past the second
    ///   is ignored
    /// - A string with no digits at all is an error
    /// - More than one decimal point after stripping is an error: `"1.2.3"`
    ///   is garbage, not ₹1.20
    ///
    /// ## Example
    /// ```rust
    /// use paisa_core::money::Money;
    ///
    /// assert_eq!(Money::parse_price("₹12.50").unwrap().paise(), 1250);
    /// assert_eq!(Money::parse_price("12.5").unwrap().paise(), 1250);
    /// assert!(Money::parse_price("free").is_err());
    /// ```
    pub fn parse_price(input: &str) -> CoreResult<Money> {
        let cleaned: String = input
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();

        if !cleaned.chars().any(|c| c.is_ascii_digit()) {
            return Err(CoreError::invalid_input(
                "price",
                format!("'{}' is not a number", input.trim()),
            ));
        }

        if cleaned.matches('.').count() > 1 {
            return Err(CoreError::invalid_input(
                "price",
                format!("'{}' has more than one decimal point", input.trim()),
            ));
        }

        let mut parts = cleaned.splitn(2, '.');
        let whole_digits = parts.next().unwrap_or("");
        let frac_digits: Vec<u32> = parts
            .next()
            .unwrap_or("")
            .chars()
            .take(2)
            .filter_map(|c| c.to_digit(10))
            .collect();

        let whole: i64 = if whole_digits.is_empty() {
            0
        } else {
            whole_digits.parse().map_err(|_| {
                CoreError::invalid_input("price", format!("'{}' is out of range", input.trim()))
            })?
        };

        let frac = match frac_digits.as_slice() {
            [] => 0,
            [d] => d * 10,
            [d1, d2, ..] => d1 * 10 + d2,
        };

        whole
            .checked_mul(100)
            .and_then(|p| p.checked_add(frac as i64))
            .map(Money::from_paise)
            .ok_or_else(|| {
                CoreError::invalid_input("price", format!("'{}' is out of range", input.trim()))
            })
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the value with the rupee symbol, for debugging and logs.
/// CSV and report output use [`Money::fixed2`] instead.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.fixed2())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity (line subtotal = unit price × quantity).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation of line subtotals into a grand total.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
