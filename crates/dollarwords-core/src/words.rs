//! # Words Module
//!
//! The recursive engine that spells an unsigned integer in English.
//!
//! ## Decomposition
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  convert(1_234_056, Range::DOLLARS)                                     │
//! │       │                                                                 │
//! │       ├── validate against range ──► AboveMax/BelowMin → error          │
//! │       │                                                                 │
//! │       ▼  SevenToNineDigit                                               │
//! │  group 1 ──► "one" + " million"                                         │
//! │  rest 234_056  ─► FourToSixDigit                                        │
//! │       │  group 234 ─► "two hundred thirty four" + " thousand"           │
//! │       │  rest 56   ─► RegularTwoDigit ─► "fifty six"                    │
//! │       ▼                                                                 │
//! │  "one million two hundred thirty four thousand fifty six"               │
//! │                                                                         │
//! │  A zero remainder is dropped, never spelled: 1000 → "one thousand"      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Recursion depth is bounded by the three digit groups, so a plain
//! recursive function is enough.

use crate::error::{ConversionError, ConversionResult};
use crate::magnitude::{classify, Magnitude};
use crate::range::{Range, RangeOutcome};

// =============================================================================
// Lookup Tables
// =============================================================================

/// Words for 1 to 9, indexed by `n - 1`.
const SINGLE_DIGIT_WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Words for 10 to 19, indexed by `n - 10`.
const TEEN_WORDS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Words for 20, 30, ... 90, indexed by `n / 10 - 2`.
///
/// "fourty" is the established output of this service; clients compare
/// against it verbatim.
const TENS_WORDS: [&str; 8] = [
    "twenty", "thirty", "fourty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Range of a digit group that precedes "thousand" or "million".
const GROUP: Range = match Range::new(1, 999) {
    Some(range) => range,
    None => panic!("group range is inverted"),
};

/// Range of what may follow "hundred".
const AFTER_HUNDRED: Range = match Range::new(1, 99) {
    Some(range) => range,
    None => panic!("hundred remainder range is inverted"),
};

/// Range of what may follow "million".
const AFTER_MILLION: Range = match Range::new(1, 999_999) {
    Some(range) => range,
    None => panic!("million remainder range is inverted"),
};

/// Looks up the word for 1 to 9.
pub fn single_digit_word(n: u64) -> Option<&'static str> {
    match n {
        1..=9 => Some(SINGLE_DIGIT_WORDS[(n - 1) as usize]),
        _ => None,
    }
}

/// Looks up the word for 10 to 19 or a multiple of ten from 20 to 90.
pub fn irregular_word(n: u64) -> Option<&'static str> {
    match n {
        10..=19 => Some(TEEN_WORDS[(n - 10) as usize]),
        20..=90 if n % 10 == 0 => Some(TENS_WORDS[(n / 10 - 2) as usize]),
        _ => None,
    }
}

// =============================================================================
// Conversion
// =============================================================================

/// Converts `n` to words after checking it against `range`.
///
/// ## Example
/// ```rust
/// use dollarwords_core::range::Range;
/// use dollarwords_core::words::convert;
///
/// assert_eq!(convert(0, Range::CENTS).unwrap(), "zero");
/// assert_eq!(convert(99, Range::CENTS).unwrap(), "ninety nine");
/// assert!(convert(100, Range::CENTS).is_err());
/// assert_eq!(
///     convert(33_099, Range::DOLLARS).unwrap(),
///     "thirty three thousand ninety nine"
/// );
/// ```
///
/// ## Errors
/// - [`ConversionError::ValueOutOfRange`] when `n` is outside `range`
/// - [`ConversionError::UnsupportedMagnitude`] when `n` exceeds 999,999,999
///   (only reachable with a range wider than [`Range::DOLLARS`])
pub fn convert(n: u64, range: Range) -> ConversionResult<String> {
    ensure_in_range(n, range)?;

    match classify(n) {
        Magnitude::Zero => Ok("zero".to_string()),
        _ => spell(n),
    }
}

/// Spells a non-zero `n`. Zero has no place inside a composed phrase, so it
/// is rejected here the same way an unknown magnitude is.
fn spell(n: u64) -> ConversionResult<String> {
    match classify(n) {
        Magnitude::SingleDigit => lookup(single_digit_word(n), n),
        Magnitude::IrregularTwoDigit => lookup(irregular_word(n), n),
        Magnitude::RegularTwoDigit => {
            let ones = n % 10;
            let tens = lookup(irregular_word(n - ones), n)?;
            let ones = lookup(single_digit_word(ones), n)?;
            Ok(format!("{tens} {ones}"))
        }
        Magnitude::ThreeDigit => spell_scaled(n, 100, "hundred", AFTER_HUNDRED),
        Magnitude::FourToSixDigit => spell_scaled(n, 1_000, "thousand", GROUP),
        Magnitude::SevenToNineDigit => spell_scaled(n, 1_000_000, "million", AFTER_MILLION),
        Magnitude::Zero | Magnitude::OutOfDomain => Err(ConversionError::UnsupportedMagnitude(n)),
    }
}

/// Spells `n` as `<group> <scale word> [<remainder>]`.
///
/// The group (`n / scale`) is always in 1..=999; the remainder is only
/// appended when non-zero and must lie within `remainder_range`.
fn spell_scaled(
    n: u64,
    scale: u64,
    scale_word: &str,
    remainder_range: Range,
) -> ConversionResult<String> {
    let group = n / scale;
    let remainder = n % scale;

    let mut phrase = spell_within(group, GROUP)?;
    phrase.push(' ');
    phrase.push_str(scale_word);

    if remainder != 0 {
        phrase.push(' ');
        phrase.push_str(&spell_within(remainder, remainder_range)?);
    }

    Ok(phrase)
}

fn spell_within(n: u64, range: Range) -> ConversionResult<String> {
    ensure_in_range(n, range)?;
    spell(n)
}

fn ensure_in_range(n: u64, range: Range) -> ConversionResult<()> {
    match range.validate(n) {
        RangeOutcome::InRange => Ok(()),
        outcome => Err(ConversionError::ValueOutOfRange {
            outcome,
            range,
            value: n,
        }),
    }
}

fn lookup(word: Option<&'static str>, n: u64) -> ConversionResult<String> {
    word.map(str::to_string)
        .ok_or(ConversionError::UnsupportedMagnitude(n))
}

// =============================================================================
// Unit Tests
// =============================================================================
