//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A register that computes tax on floats will eventually disagree       │
//! │  with the receipt by one unit.                                         │
//! │                                                                         │
//! │  OUR SOLUTION: integer minor units (yen, cents, ...)                   │
//! │  All arithmetic is exact; the one place precision is dropped           │
//! │  (tax truncation) is explicit and documented.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use reji_core::money::Money;
//! use reji_core::types::TaxRate;
//!
//! let price = Money::from_minor(350);
//! let tax = price.tax_portion(TaxRate::from_bps(1000)); // 10%
//! assert_eq!(tax.minor_units(), 35);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: negative values exist as arithmetic intermediates
///   (e.g. refund math in a host application); validation rejects them at
///   the API boundary where the domain requires non-negative prices
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Derives**: full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from minor units (the smallest currency unit).
    ///
    /// ```rust
    /// use reji_core::money::Money;
    ///
    /// let price = Money::from_minor(1099);
    /// assert_eq!(price.minor_units(), 1099);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in minor units.
    #[inline]
    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
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

    /// Computes the tax portion of this amount, truncating the fraction.
    ///
    /// ## Truncation, Not Rounding
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  tax = floor(amount × rate)                                         │
    /// │                                                                     │
    /// │  amount 9, rate 10%  → 0.9 → tax 0   (NOT 1)                       │
    /// │  amount 350, rate 10% → 35.0 → tax 35                               │
    /// │                                                                     │
    /// │  The fractional part of the tax is dropped, never rounded up.      │
    /// │  This matches how the register totals receipts; switching to       │
    /// │  round-half-up would change totals and is a business decision,     │
    /// │  not a bug fix.                                                    │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// Callers with multiple line items must sum first and truncate once:
    /// truncating per item undercounts by up to one minor unit per item.
    /// [`cashier::calc_tax_total`] does this correctly.
    ///
    /// ## Example
    /// ```rust
    /// use reji_core::money::Money;
    /// use reji_core::types::TaxRate;
    ///
    /// let amount = Money::from_minor(100);
    /// let tax = amount.tax_portion(TaxRate::from_bps(1000)); // 10%
    /// assert_eq!(tax.minor_units(), 10);
    ///
    /// let small = Money::from_minor(9);
    /// assert_eq!(small.tax_portion(TaxRate::from_bps(1000)).minor_units(), 0);
    /// ```
    ///
    /// [`cashier::calc_tax_total`]: crate::cashier::calc_tax_total
    pub fn tax_portion(&self, rate: TaxRate) -> Money {
        // Use i128 to prevent overflow on large amounts.
        // rate.bps() is basis points: 1000 = 10%.
        // Integer division truncates, which for non-negative amounts is
        // exactly the floor the domain requires.
        let tax_minor = (self.0 as i128 * rate.bps() as i128) / 10000;
        Money::from_minor(tax_minor as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and logs. Use host-side formatting for actual UI
/// display to handle currency symbols and localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Summing an iterator of Money values (for aggregate tax bases).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let money = Money::from_minor(1099);
        assert_eq!(money.minor_units(), 1099);
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(500);

        assert_eq!((a + b).minor_units(), 1500);
        assert_eq!((a - b).minor_units(), 500);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, 9]
            .iter()
            .map(|&m| Money::from_minor(m))
            .sum();
        assert_eq!(total.minor_units(), 359);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_tax_portion_exact() {
        // 100 at 10% = 10, no fraction to drop
        let amount = Money::from_minor(100);
        let rate = TaxRate::from_bps(1000);
        assert_eq!(amount.tax_portion(rate).minor_units(), 10);
    }

    #[test]
    fn test_tax_portion_truncates() {
        // 9 at 10% = 0.9 → 0 (truncated, not rounded to 1)
        let amount = Money::from_minor(9);
        let rate = TaxRate::from_bps(1000);
        assert_eq!(amount.tax_portion(rate).minor_units(), 0);

        // 19 at 10% = 1.9 → 1
        let amount = Money::from_minor(19);
        assert_eq!(amount.tax_portion(rate).minor_units(), 1);
    }

    #[test]
    fn test_tax_portion_large_amount_no_overflow() {
        // Near-i64-max base must not overflow the intermediate product
        let amount = Money::from_minor(i64::MAX / 2);
        let rate = TaxRate::from_bps(1000);
        let tax = amount.tax_portion(rate);
        assert_eq!(tax.minor_units(), (i64::MAX / 2) / 10);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        let negative = Money::from_minor(-100);
        assert!(negative.is_negative());
        assert_eq!(Money::default(), Money::zero());
    }

    /// Documents why aggregate-then-truncate matters: truncating per item
    /// loses up to one minor unit per item.
    #[test]
    fn test_per_item_truncation_undercounts() {
        let rate = TaxRate::from_bps(1000);
        let a = Money::from_minor(5);
        let b = Money::from_minor(5);

        let per_item = a.tax_portion(rate) + b.tax_portion(rate);
        let aggregate = (a + b).tax_portion(rate);

        assert_eq!(per_item.minor_units(), 0);
        assert_eq!(aggregate.minor_units(), 1);
        assert_ne!(per_item, aggregate);
    }
}
