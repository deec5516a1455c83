//! # Magnitude Module
//!
//! Classifies an integer by its shape so the word engine can pick a strategy.
//!
//! ## Decision Ladder
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  n                               Magnitude                              │
//! │  ──────────────────────────────  ─────────────────                      │
//! │  0                               Zero                                   │
//! │  1 ..= 9                         SingleDigit                            │
//! │  10 ..= 19, 20, 30, ... 90       IrregularTwoDigit                      │
//! │  21 ..= 99 (not multiple of 10)  RegularTwoDigit                        │
//! │  100 ..= 999                     ThreeDigit                             │
//! │  1 000 ..= 999 999               FourToSixDigit                         │
//! │  1 000 000 ..= 999 999 999       SevenToNineDigit                       │
//! │  everything above                OutOfDomain                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use std::fmt;

/// Structural category of an unsigned integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Magnitude {
    Zero,
    /// 1 to 9.
    SingleDigit,
    /// 10 to 19, or an exact multiple of ten from 20 to 90.
    IrregularTwoDigit,
    /// 21 to 99 excluding multiples of ten.
    RegularTwoDigit,
    /// 100 to 999.
    ThreeDigit,
    /// 1,000 to 999,999.
    FourToSixDigit,
    /// 1,000,000 to 999,999,999.
    SevenToNineDigit,
    /// Above 999,999,999.
    OutOfDomain,
}

/// Classifies `n`. Total over `u64`.
///
/// ## Example
/// ```rust
/// use dollarwords_core::magnitude::{classify, Magnitude};
///
/// assert_eq!(classify(40), Magnitude::IrregularTwoDigit);
/// assert_eq!(classify(41), Magnitude::RegularTwoDigit);
/// ```
pub const fn classify(n: u64) -> Magnitude {
    match n {
        0 => Magnitude::Zero,
        1..=9 => Magnitude::SingleDigit,
        10..=19 => Magnitude::IrregularTwoDigit,
        20..=99 if n % 10 == 0 => Magnitude::IrregularTwoDigit,
        20..=99 => Magnitude::RegularTwoDigit,
        100..=999 => Magnitude::ThreeDigit,
        1_000..=999_999 => Magnitude::FourToSixDigit,
        1_000_000..=999_999_999 => Magnitude::SevenToNineDigit,
        _ => Magnitude::OutOfDomain,
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Magnitude::Zero => "zero",
            Magnitude::SingleDigit => "single digit",
            Magnitude::IrregularTwoDigit => "irregular two digit",
            Magnitude::RegularTwoDigit => "regular two digit",
            Magnitude::ThreeDigit => "three digit",
            Magnitude::FourToSixDigit => "four to six digit",
            Magnitude::SevenToNineDigit => "seven to nine digit",
            Magnitude::OutOfDomain => "out of domain",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
