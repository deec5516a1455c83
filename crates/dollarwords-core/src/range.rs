//! # Range Module
//!
//! Inclusive bounds and the range check that guards every conversion step.
//!
//! ## Where Ranges Apply
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Call site                      Range                                   │
//! │  ─────────────────────────────  ──────────────────                      │
//! │  dollars (integer part)         [0; 999 999 999]   Range::DOLLARS       │
//! │  cents (fraction part)          [0; 99]            Range::CENTS         │
//! │  group before a scale word      [1; 999]           (words module)       │
//! │  remainder after "hundred"      [1; 99]            (words module)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use dollarwords_core::range::{Range, RangeOutcome};
//!
//! assert_eq!(Range::CENTS.validate(42), RangeOutcome::InRange);
//! assert_eq!(Range::CENTS.validate(100), RangeOutcome::AboveMax);
//! assert!(Range::new(5, 1).is_none());
//! ```

use serde::Serialize;
use std::fmt;

use crate::{MAX_CENTS, MAX_DOLLARS};

// =============================================================================
// Range
// =============================================================================

/// An inclusive closed interval `[min; max]` of unsigned integers.
///
/// Always satisfies `min <= max`; the fields are private so that the
/// invariant can only be established through [`Range::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Range {
    min: u64,
    max: u64,
}

impl Range {
    /// Bounds for the whole-dollar component.
    pub const DOLLARS: Range = Range {
        min: 0,
        max: MAX_DOLLARS,
    };

    /// Bounds for the cents component.
    pub const CENTS: Range = Range {
        min: 0,
        max: MAX_CENTS,
    };

    /// Creates a range, or returns `None` when `min > max`.
    pub const fn new(min: u64, max: u64) -> Option<Self> {
        if min > max {
            None
        } else {
            Some(Range { min, max })
        }
    }

    /// Lower bound (inclusive).
    #[inline]
    pub const fn min(&self) -> u64 {
        self.min
    }

    /// Upper bound (inclusive).
    #[inline]
    pub const fn max(&self) -> u64 {
        self.max
    }

    /// Checks `n` against this range.
    ///
    /// The upper bound is tested first; for a single value the two failures
    /// are mutually exclusive, so the order never changes the answer.
    pub const fn validate(&self, n: u64) -> RangeOutcome {
        if n > self.max {
            RangeOutcome::AboveMax
        } else if n < self.min {
            RangeOutcome::BelowMin
        } else {
            RangeOutcome::InRange
        }
    }

    /// Returns true if `min <= n <= max`.
    #[inline]
    pub const fn contains(&self, n: u64) -> bool {
        matches!(self.validate(n), RangeOutcome::InRange)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{};{}]", self.min, self.max)
    }
}

// =============================================================================
// Range Outcome
// =============================================================================

/// Result of checking a value against a [`Range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeOutcome {
    InRange,
    BelowMin,
    AboveMax,
}

impl fmt::Display for RangeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeOutcome::InRange => write!(f, "in range"),
            RangeOutcome::BelowMin => write!(f, "below minimum"),
            RangeOutcome::AboveMax => write!(f, "above maximum"),
        }
    }
}

/// Checks `n` against `range`. Same as [`Range::validate`].
pub const fn validate(range: Range, n: u64) -> RangeOutcome {
    range.validate(n)
}

// =============================================================================
// Unit Tests
// =============================================================================
