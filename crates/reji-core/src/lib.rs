//! # reji-core: Pure Business Logic for Reji
//!
//! This crate is the **heart** of Reji. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Reji Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Host Application (any)                          │   │
//! │  │      register UI, receipt printer, loyalty backend, ...         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ reji-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  cashier  │  │  loyalty  │  │   │
//! │  │   │   Goods   │  │   Money   │  │  calc_tax │  │   Tiers   │  │   │
//! │  │   │  TaxRate  │  │  TaxCalc  │  │  (totals) │  │   Rates   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Goods, TaxRate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cashier`] - Tax calculation for single goods and baskets
//! - [`loyalty`] - Consumer tiers and point-return rates
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in minor units (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use reji_core::cashier::calc_tax_total;
//! use reji_core::loyalty::{Consumer, ConsumerTier};
//! use reji_core::types::Goods;
//!
//! // Tax on a basket: sum first, truncate once
//! let basket = [Goods::new(100), Goods::new(250)];
//! let tax = calc_tax_total(&basket).unwrap();
//! assert_eq!(tax.minor_units(), 35);
//!
//! // Loyalty rate by tier
//! let consumer = Consumer::new(ConsumerTier::Silver);
//! assert_eq!(consumer.point_return_rate().fraction(), 0.03);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cashier;
pub mod error;
pub mod loyalty;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use reji_core::Money` instead of
// `use reji_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use loyalty::{rate_for, Consumer, ConsumerTier, ReturnRate};
pub use money::Money;
pub use types::{Goods, TaxRate};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The process-wide consumption tax rate: 10%.
///
/// ## Why a constant?
/// The register applies one rate to everything it sells. Per-category
/// rates (reduced-rate food, etc.) would move this onto [`Goods`]; until
/// a tenant needs that, a constant keeps the call sites honest.
pub const TAX_RATE: TaxRate = TaxRate::from_bps(1000);

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_constant() {
        assert_eq!(TAX_RATE.bps(), 1000);
        assert!((TAX_RATE.percentage() - 10.0).abs() < 0.001);
    }
}
