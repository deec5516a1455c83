//! # Error Types
//!
//! The single error type produced by dollarwords-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Where Errors Arise                              │
//! │                                                                         │
//! │  currency::format(amount)                                              │
//! │   ├── MonetaryAmount::try_from ──► NegativeAmount                      │
//! │   │                            └─► TooManyDecimalDigits                │
//! │   ├── words::convert(dollars) ──► ValueOutOfRange / UnsupportedMagnitude│
//! │   └── words::convert(cents)   ──► ValueOutOfRange / UnsupportedMagnitude│
//! │                                                                         │
//! │  The first failure short-circuits everything after it.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (value, range bounds)
//! 3. Errors are enum variants, never String
//! 4. Every failure is a deterministic function of the input; none is retried

use thiserror::Error;

use crate::range::{Range, RangeOutcome};

// =============================================================================
// Conversion Error
// =============================================================================

/// Errors returned while turning an amount into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The amount is below zero.
    #[error("The amount must not be negative")]
    NegativeAmount,

    /// The amount has more fractional digits than cents can express.
    ///
    /// ## When This Occurs
    /// - `1.998` (3 digits)
    /// - `0.0090` (normalizes to `0.009`, 3 digits)
    ///
    /// Trailing zeros alone never trigger it: `1.100` is `1.1`.
    #[error("The amount must not have more than 2 decimal digits (got {digits})")]
    TooManyDecimalDigits { digits: u32 },

    /// A component fell outside the range allowed at its call site.
    #[error("The value {value} is {outcome} of range {range}")]
    ValueOutOfRange {
        outcome: RangeOutcome,
        range: Range,
        value: u64,
    },

    /// A magnitude reached a conversion step with no handling path.
    ///
    /// Callers that validate against a range capped at 999,999,999 never
    /// see this; it marks a defect in the engine, not bad user input.
    #[error("No conversion is defined for the magnitude of {0}")]
    UnsupportedMagnitude(u64),
}

impl ConversionError {
    /// Stable machine-readable identifier for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ConversionError::NegativeAmount => "negative_amount",
            ConversionError::TooManyDecimalDigits { .. } => "too_many_decimal_digits",
            ConversionError::ValueOutOfRange { .. } => "value_out_of_range",
            ConversionError::UnsupportedMagnitude(_) => "unsupported_magnitude",
        }
    }

    /// Returns true if the error signals an internal invariant violation
    /// rather than rejected input.
    pub fn is_internal(&self) -> bool {
        matches!(self, ConversionError::UnsupportedMagnitude(_))
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ConversionError.
pub type ConversionResult<T> = Result<T, ConversionError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConversionError::NegativeAmount.to_string(),
            "The amount must not be negative"
        );
        assert_eq!(
            ConversionError::TooManyDecimalDigits { digits: 3 }.to_string(),
            "The amount must not have more than 2 decimal digits (got 3)"
        );
    }

    #[test]
    fn test_out_of_range_message() {
        let err = ConversionError::ValueOutOfRange {
            outcome: RangeOutcome::AboveMax,
            range: Range::CENTS,
            value: 100,
        };
        assert_eq!(err.to_string(), "The value 100 is above maximum of range [0;99]");
    }

    #[test]
    fn test_kind_and_internal_flag() {
        assert_eq!(ConversionError::NegativeAmount.kind(), "negative_amount");
        assert!(!ConversionError::NegativeAmount.is_internal());

        let internal = ConversionError::UnsupportedMagnitude(1_000_000_000);
        assert_eq!(internal.kind(), "unsupported_magnitude");
        assert!(internal.is_internal());
    }
}
