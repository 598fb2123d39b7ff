//! # Validation Module
//!
//! Input validation utilities for reji-core.
//!
//! Validation runs at the API boundary, before any business logic: the
//! calculation functions call these and fail fast, so the math below them
//! only ever sees values in range.
//!
//! ## Usage
//! ```rust
//! use reji_core::validation::validate_price_minor;
//!
//! assert!(validate_price_minor(1099).is_ok());
//! assert!(validate_price_minor(-1).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a price in minor units.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
pub fn validate_price_minor(price_minor: i64) -> ValidationResult<()> {
    if price_minor < 0 {
        return Err(ValidationError::NegativePrice { price_minor });
    }

    Ok(())
}

/// Validates a rate in basis points.
///
/// ## Rules
/// - Must be between 0 and 10000 (0% to 100%)
pub fn validate_rate_bps(bps: u32) -> ValidationResult<()> {
    if bps > 10000 {
        return Err(ValidationError::RateOutOfRange { bps });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
