//! # Cashier Module
//!
//! Tax calculation entry points.
//!
//! ## Aggregate Then Truncate
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Items: [5, 5]   Rate: 10%                                              │
//! │                                                                         │
//! │  WRONG (per-item):  floor(0.5) + floor(0.5) = 0 + 0 = 0                │
//! │  RIGHT (aggregate): floor((5 + 5) × 0.1)    = floor(1.0) = 1           │
//! │                                                                         │
//! │  Tax is owed on the receipt total, not on each line. Truncating        │
//! │  per line undercounts by up to one minor unit per item.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use reji_core::cashier::{calc_tax, calc_tax_total};
//! use reji_core::types::Goods;
//!
//! let tax = calc_tax(&Goods::new(100)).unwrap();
//! assert_eq!(tax.minor_units(), 10);
//!
//! let basket = [Goods::new(100), Goods::new(250)];
//! let tax = calc_tax_total(&basket).unwrap();
//! assert_eq!(tax.minor_units(), 35);
//! ```

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::Goods;
use crate::validation::validate_price_minor;
use crate::TAX_RATE;

/// Computes the tax on a single article: `floor(price × TAX_RATE)`.
///
/// Fails with a validation error if the price is negative. Zero-priced
/// goods are fine (free items owe no tax).
pub fn calc_tax(goods: &Goods) -> CoreResult<Money> {
    validate_price_minor(goods.price_minor)?;
    Ok(goods.price().tax_portion(TAX_RATE))
}

/// Computes the tax on a basket: `floor(sum(prices) × TAX_RATE)`.
///
/// The prices are summed before the single truncation; see the module
/// docs for why the order matters. An empty basket owes zero tax. Any
/// negative price fails the whole call before anything is summed.
pub fn calc_tax_total(goods: &[Goods]) -> CoreResult<Money> {
    for g in goods {
        validate_price_minor(g.price_minor)?;
    }

    let subtotal: Money = goods.iter().map(Goods::price).sum();
    Ok(subtotal.tax_portion(TAX_RATE))
}

// =============================================================================
// Unit Tests
// =============================================================================
