//! # Error Types
//!
//! Domain-specific error types for reji-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  reji-core errors (this file)                                          │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → Host application → User           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending value, the bound)
//! 3. Errors are enum variants, never String
//! 4. Failures are local and immediate - no retry, no recovery, no
//!    partial results; the caller decides what to do

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent domain rule violations. They should be caught by
/// the host application and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A raw value does not name any known consumer tier.
    ///
    /// ## When This Occurs
    /// - Deserializing a tier name from an external source ("diamond")
    /// - Decoding a tier discriminant from a foreign system (7)
    ///
    /// Unreachable through the typed API: a [`ConsumerTier`] value is
    /// always one of the four defined tiers.
    ///
    /// [`ConsumerTier`]: crate::loyalty::ConsumerTier
    #[error("unknown consumer tier: {value}")]
    UnknownTier { value: String },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller input doesn't meet requirements.
/// Used for early validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A price was negative. Zero is allowed (free items), negative is not.
    #[error("price must be non-negative, got {price_minor}")]
    NegativePrice { price_minor: i64 },

    /// A basis-points rate exceeded 100%.
    #[error("rate must be between 0 and 10000 bps, got {bps}")]
    RateOutOfRange { bps: u32 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::UnknownTier {
            value: "diamond".to_string(),
        };
        assert_eq!(err.to_string(), "unknown consumer tier: diamond");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::NegativePrice { price_minor: -100 };
        assert_eq!(err.to_string(), "price must be non-negative, got -100");

        let err = ValidationError::RateOutOfRange { bps: 12000 };
        assert_eq!(
            err.to_string(),
            "rate must be between 0 and 10000 bps, got 12000"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::NegativePrice { price_minor: -1 };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
