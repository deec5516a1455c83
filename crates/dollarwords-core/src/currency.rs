//! # Currency Module
//!
//! Assembles the final sentence for a monetary amount.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Amount entered: 1234.56                                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MonetaryAmount::try_from  ── negative? ──► NegativeAmount              │
//! │       │                    ── > 2 digits? ► TooManyDecimalDigits        │
//! │       ▼                                                                 │
//! │  (1234, 56)                                                             │
//! │       │                                                                 │
//! │       ├── words::convert(1234, [0;999999999]) → "one thousand two ..."  │
//! │       └── words::convert(56,   [0;99])        → "fifty six"             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "one thousand two hundred thirty four dollars and fifty six cents"    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Assembly Rules
//! - "dollar" only when the dollar words are exactly "one", otherwise "dollars"
//! - "cent" only when the cent words are exactly "one", otherwise "cents"
//! - zero cents drops the whole " and ... cents" clause

use rust_decimal::Decimal;

use crate::amount::MonetaryAmount;
use crate::error::ConversionResult;
use crate::range::Range;
use crate::words;

/// Renders an amount of some currency as words.
///
/// The transport layer is generic over this trait, so tests can swap in a
/// formatter with canned output.
pub trait CurrencyFormatter {
    /// Converts `amount` to its word representation.
    fn format(&self, amount: Decimal) -> ConversionResult<String>;
}

/// Formats US-style amounts: dollars and cents.
#[derive(Debug, Clone, Copy, Default)]
pub struct DollarFormatter;

impl DollarFormatter {
    /// Creates a new formatter.
    pub const fn new() -> Self {
        DollarFormatter
    }

    /// Formats an already decomposed amount.
    ///
    /// ## Errors
    /// Dollars above 999,999,999 fail with `ValueOutOfRange`; in that case
    /// the cents are never converted.
    pub fn format_amount(&self, amount: MonetaryAmount) -> ConversionResult<String> {
        let dollars = words::convert(amount.dollars(), Range::DOLLARS)?;
        let cents = words::convert(amount.cents(), Range::CENTS)?;

        let dollar_unit = if dollars == "one" { "dollar" } else { "dollars" };
        let mut sentence = format!("{dollars} {dollar_unit}");

        if cents != "zero" {
            let cent_unit = if cents == "one" { "cent" } else { "cents" };
            sentence.push_str(&format!(" and {cents} {cent_unit}"));
        }

        Ok(sentence)
    }
}

impl CurrencyFormatter for DollarFormatter {
    fn format(&self, amount: Decimal) -> ConversionResult<String> {
        self.format_amount(MonetaryAmount::try_from(amount)?)
    }
}

/// Converts `amount` to words using [`DollarFormatter`].
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use dollarwords_core::currency::format;
///
/// assert_eq!(format(Decimal::ONE).unwrap(), "one dollar");
/// assert_eq!(format(Decimal::new(1, 2)).unwrap(), "zero dollars and one cent");
/// assert!(format(Decimal::new(-5, 0)).is_err());
/// ```
pub fn format(amount: Decimal) -> ConversionResult<String> {
    DollarFormatter.format(amount)
}

// =============================================================================
// Unit Tests
// =============================================================================
