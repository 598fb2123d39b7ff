//! # Domain Types
//!
//! Core domain types used throughout reji-core.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │     Goods       │   │     TaxRate     │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  price_minor    │   │  bps (u32)      │                             │
//! │  │  (transient)    │   │  1000 = 10%     │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  Goods carries no identity: it is a value consumed by one              │
//! │  calculation, not a persisted entity.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1000 bps = 10% (the consumption tax rate)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for convenience).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Goods
// =============================================================================

/// A priced article, as scanned at the register.
///
/// Goods is a transient value: it exists for the duration of the
/// calculation that consumes it. No id, no lifecycle, no stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Goods {
    /// Price in minor currency units.
    pub price_minor: i64,
}

impl Goods {
    /// Creates goods with the given price in minor units.
    ///
    /// The price is not validated here; [`cashier::calc_tax`] rejects
    /// negative prices at the point of calculation.
    ///
    /// [`cashier::calc_tax`]: crate::cashier::calc_tax
    #[inline]
    pub const fn new(price_minor: i64) -> Self {
        Goods { price_minor }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub const fn price(&self) -> Money {
        Money::from_minor(self.price_minor)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(1000);
        assert_eq!(rate.bps(), 1000);
        assert!((rate.percentage() - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_tax_rate_from_percentage() {
        let rate = TaxRate::from_percentage(10.0);
        assert_eq!(rate.bps(), 1000);
    }

    #[test]
    fn test_tax_rate_default_is_zero() {
        assert!(TaxRate::default().is_zero());
    }

    #[test]
    fn test_goods_price() {
        let goods = Goods::new(350);
        assert_eq!(goods.price(), Money::from_minor(350));
    }
}
