//! # Amount Module
//!
//! Validates a decimal amount and splits it into whole dollars and cents.
//!
//! ## Why Decimal, Not f64?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "How many fractional digits does this amount have?"                    │
//! │                                                                         │
//! │  f64:      1.1  is stored as 1.100000000000000088817841970012523…       │
//! │            the answer depends on how the float is printed               │
//! │                                                                         │
//! │  Decimal:  1.1  is stored as 11 × 10⁻¹                                  │
//! │            the answer is the scale, exactly                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This is the only place fractional precision is consumed: once an amount
//! becomes a [`MonetaryAmount`] it is just two unsigned integers.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::ConversionError;
use crate::MAX_DECIMAL_DIGITS;

/// A validated, non-negative amount split into dollars and cents.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use dollarwords_core::MonetaryAmount;
///
/// let amount = MonetaryAmount::try_from(Decimal::new(123456, 2)).unwrap(); // 1234.56
/// assert_eq!(amount.dollars(), 1234);
/// assert_eq!(amount.cents(), 56);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonetaryAmount {
    dollars: u64,
    cents: u64,
}

impl MonetaryAmount {
    /// Whole-dollar component (`floor(amount)`).
    #[inline]
    pub const fn dollars(&self) -> u64 {
        self.dollars
    }

    /// Cents component, always 0 to 99.
    #[inline]
    pub const fn cents(&self) -> u64 {
        self.cents
    }
}

impl TryFrom<Decimal> for MonetaryAmount {
    type Error = ConversionError;

    /// Checks the sign first, then the precision, then decomposes.
    ///
    /// ## Rules
    /// - Negative amounts fail with `NegativeAmount`; `-0` counts as zero
    /// - More than two fractional digits after normalization fail with
    ///   `TooManyDecimalDigits`
    /// - A whole part too large for `u64` saturates, so that the dollars
    ///   range check reports it as above maximum
    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        if amount < Decimal::ZERO {
            return Err(ConversionError::NegativeAmount);
        }

        let digits = amount.normalize().scale();
        if digits > MAX_DECIMAL_DIGITS {
            return Err(ConversionError::TooManyDecimalDigits { digits });
        }

        let dollars = amount.trunc().to_u64().unwrap_or(u64::MAX);
        // Exact: the scale is at most 2 here, so fract() * 100 is an integer.
        let cents = (amount.fract() * Decimal::ONE_HUNDRED)
            .round()
            .to_u64()
            .unwrap_or(0);

        Ok(MonetaryAmount { dollars, cents })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn split(amount: Decimal) -> (u64, u64) {
        let amount = MonetaryAmount::try_from(amount).unwrap();
        (amount.dollars(), amount.cents())
    }

    #[test]
    fn test_decomposition() {
        assert_eq!(split(dec!(0)), (0, 0));
        assert_eq!(split(dec!(0.01)), (0, 1));
        assert_eq!(split(dec!(0.1)), (0, 10));
        assert_eq!(split(dec!(1234.56)), (1234, 56));
        assert_eq!(split(dec!(999999999.99)), (999_999_999, 99));
    }

    #[test]
    fn test_trailing_zeros_do_not_count_as_precision() {
        assert_eq!(split(dec!(1.10)), (1, 10));
        assert_eq!(split(dec!(1.100)), (1, 10));
        assert_eq!(split(dec!(5.0000)), (5, 0));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert_eq!(split(dec!(-0)), (0, 0));
        assert_eq!(split(dec!(-0.00)), (0, 0));
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(
            MonetaryAmount::try_from(dec!(-100)),
            Err(ConversionError::NegativeAmount)
        );
        assert_eq!(
            MonetaryAmount::try_from(dec!(-1.99)),
            Err(ConversionError::NegativeAmount)
        );
    }

    #[test]
    fn test_too_many_decimal_digits() {
        for amount in [dec!(1.998), dec!(99.001), dec!(0.0090)] {
            assert_eq!(
                MonetaryAmount::try_from(amount),
                Err(ConversionError::TooManyDecimalDigits { digits: 3 }),
                "amount = {amount}"
            );
        }
    }

    #[test]
    fn test_sign_checked_before_precision() {
        assert_eq!(
            MonetaryAmount::try_from(dec!(-1.998)),
            Err(ConversionError::NegativeAmount)
        );
    }

    #[test]
    fn test_huge_whole_part_is_kept_large() {
        let amount = MonetaryAmount::try_from(dec!(5000000000)).unwrap();
        assert_eq!(amount.dollars(), 5_000_000_000);

        let amount = MonetaryAmount::try_from(Decimal::MAX).unwrap();
        assert_eq!(amount.dollars(), u64::MAX);
    }
}
