//! # Loyalty Module
//!
//! Consumer tiers and their point-return rates.
//!
//! ## The Rate Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Point-Return Rates                                 │
//! │                                                                         │
//! │   Tier       bps     fraction                                           │
//! │   ────────   ─────   ────────                                           │
//! │   Bronze      100      0.01                                             │
//! │   Silver      300      0.03                                             │
//! │   Gold        500      0.05                                             │
//! │   Platinum   1000      0.10                                             │
//! │                                                                         │
//! │  The lookup is total: every tier has exactly one rate, enforced by     │
//! │  an exhaustive match. Raw values from outside the enum (wire names,    │
//! │  discriminants) go through fallible TryFrom conversions.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use reji_core::loyalty::{Consumer, ConsumerTier};
//!
//! let consumer = Consumer::new(ConsumerTier::Gold);
//! assert_eq!(consumer.point_return_rate().fraction(), 0.05);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::error::CoreError;

// =============================================================================
// Consumer Tier
// =============================================================================

/// A consumer's loyalty tier.
///
/// Closed, ordered enumeration: Bronze < Silver < Gold < Platinum.
/// Adding a tier requires touching the rate table below, and the
/// exhaustive match there makes the compiler enforce that.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ConsumerTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl ConsumerTier {
    /// All tiers, in ascending order.
    pub const ALL: [ConsumerTier; 4] = [
        ConsumerTier::Bronze,
        ConsumerTier::Silver,
        ConsumerTier::Gold,
        ConsumerTier::Platinum,
    ];

    /// Returns the point-return rate for this tier.
    ///
    /// Total over the enum; one rate per tier.
    ///
    /// ## Example
    /// ```rust
    /// use reji_core::loyalty::ConsumerTier;
    ///
    /// assert_eq!(ConsumerTier::Bronze.point_return_rate().bps(), 100);
    /// assert_eq!(ConsumerTier::Platinum.point_return_rate().bps(), 1000);
    /// ```
    pub const fn point_return_rate(&self) -> ReturnRate {
        match self {
            ConsumerTier::Bronze => ReturnRate::from_bps(100),
            ConsumerTier::Silver => ReturnRate::from_bps(300),
            ConsumerTier::Gold => ReturnRate::from_bps(500),
            ConsumerTier::Platinum => ReturnRate::from_bps(1000),
        }
    }

    /// The tier's wire name (matches the serde representation).
    pub const fn as_str(&self) -> &'static str {
        match self {
            ConsumerTier::Bronze => "bronze",
            ConsumerTier::Silver => "silver",
            ConsumerTier::Gold => "gold",
            ConsumerTier::Platinum => "platinum",
        }
    }
}

impl fmt::Display for ConsumerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a tier from its wire name.
///
/// Any other string fails with [`CoreError::UnknownTier`]: the set of
/// tiers is closed, and values from outside it are rejected at this
/// boundary rather than mapped to a default.
impl TryFrom<&str> for ConsumerTier {
    type Error = CoreError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "bronze" => Ok(ConsumerTier::Bronze),
            "silver" => Ok(ConsumerTier::Silver),
            "gold" => Ok(ConsumerTier::Gold),
            "platinum" => Ok(ConsumerTier::Platinum),
            other => Err(CoreError::UnknownTier {
                value: other.to_string(),
            }),
        }
    }
}

/// Decodes a tier from a raw discriminant (0..=3), as stored by foreign
/// systems that persist tiers as small integers.
impl TryFrom<u8> for ConsumerTier {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ConsumerTier::Bronze),
            1 => Ok(ConsumerTier::Silver),
            2 => Ok(ConsumerTier::Gold),
            3 => Ok(ConsumerTier::Platinum),
            other => Err(CoreError::UnknownTier {
                value: other.to_string(),
            }),
        }
    }
}

// =============================================================================
// Return Rate
// =============================================================================

/// A point-return rate in basis points.
///
/// Same representation rule as [`TaxRate`]: integer bps internally,
/// fraction only at the display/reporting edge.
///
/// [`TaxRate`]: crate::types::TaxRate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReturnRate(u32);

impl ReturnRate {
    /// Creates a return rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        ReturnRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a decimal fraction (100 bps → 0.01).
    #[inline]
    pub fn fraction(&self) -> f64 {
        self.0 as f64 / 10000.0
    }
}

// =============================================================================
// Consumer
// =============================================================================

/// A consumer enrolled in the loyalty scheme.
///
/// Holds exactly one tier, fixed at construction. The only derived
/// attribute is the point-return rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Consumer {
    tier: ConsumerTier,
}

impl Consumer {
    /// Creates a consumer with the given tier.
    #[inline]
    pub const fn new(tier: ConsumerTier) -> Self {
        Consumer { tier }
    }

    /// Returns the consumer's tier.
    #[inline]
    pub const fn tier(&self) -> ConsumerTier {
        self.tier
    }

    /// Returns the consumer's point-return rate, by table lookup.
    #[inline]
    pub const fn point_return_rate(&self) -> ReturnRate {
        self.tier.point_return_rate()
    }
}

// =============================================================================
// Free-Function Lookup
// =============================================================================

/// Returns the point-return rate for a tier.
///
/// Identical to [`ConsumerTier::point_return_rate`]; provided as a free
/// function for callers that treat the table as a standalone lookup.
#[inline]
pub const fn rate_for(tier: ConsumerTier) -> ReturnRate {
    tier.point_return_rate()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_table() {
        assert_eq!(rate_for(ConsumerTier::Bronze).bps(), 100);
        assert_eq!(rate_for(ConsumerTier::Silver).bps(), 300);
        assert_eq!(rate_for(ConsumerTier::Gold).bps(), 500);
        assert_eq!(rate_for(ConsumerTier::Platinum).bps(), 1000);
    }

    #[test]
    fn test_rate_fractions() {
        assert_eq!(rate_for(ConsumerTier::Bronze).fraction(), 0.01);
        assert_eq!(rate_for(ConsumerTier::Silver).fraction(), 0.03);
        assert_eq!(rate_for(ConsumerTier::Gold).fraction(), 0.05);
        assert_eq!(rate_for(ConsumerTier::Platinum).fraction(), 0.10);
    }

    #[test]
    fn test_every_tier_has_a_rate() {
        for tier in ConsumerTier::ALL {
            assert!(tier.point_return_rate().bps() > 0);
        }
    }

    #[test]
    fn test_tier_ordering() {
        assert!(ConsumerTier::Bronze < ConsumerTier::Silver);
        assert!(ConsumerTier::Silver < ConsumerTier::Gold);
        assert!(ConsumerTier::Gold < ConsumerTier::Platinum);
    }

    #[test]
    fn test_consumer_derived_rate() {
        let consumer = Consumer::new(ConsumerTier::Gold);
        assert_eq!(consumer.tier(), ConsumerTier::Gold);
        assert_eq!(consumer.point_return_rate().bps(), 500);
    }

    #[test]
    fn test_try_from_str() {
        assert_eq!(
            ConsumerTier::try_from("platinum").unwrap(),
            ConsumerTier::Platinum
        );

        let err = ConsumerTier::try_from("diamond").unwrap_err();
        assert!(matches!(err, CoreError::UnknownTier { value } if value == "diamond"));
    }

    #[test]
    fn test_try_from_discriminant() {
        assert_eq!(ConsumerTier::try_from(0u8).unwrap(), ConsumerTier::Bronze);
        assert_eq!(ConsumerTier::try_from(3u8).unwrap(), ConsumerTier::Platinum);

        let err = ConsumerTier::try_from(7u8).unwrap_err();
        assert!(matches!(err, CoreError::UnknownTier { value } if value == "7"));
    }

    #[test]
    fn test_display_matches_wire_name() {
        for tier in ConsumerTier::ALL {
            assert_eq!(tier.to_string(), tier.as_str());
            assert_eq!(ConsumerTier::try_from(tier.as_str()).unwrap(), tier);
        }
    }

    #[test]
    fn test_serde_wire_names() {
        let json = serde_json::to_string(&ConsumerTier::Gold).unwrap();
        assert_eq!(json, "\"gold\"");

        let tier: ConsumerTier = serde_json::from_str("\"bronze\"").unwrap();
        assert_eq!(tier, ConsumerTier::Bronze);

        assert!(serde_json::from_str::<ConsumerTier>("\"diamond\"").is_err());
    }
}
