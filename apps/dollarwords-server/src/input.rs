//! Entry-pattern check applied by the client before anything is sent.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Accepted                          Refused                              │
//! │  ────────────────────────────      ────────────────────────────         │
//! │  0        999999999                1234567890   (10 digits)             │
//! │  12,5     12.50                    12.345       (3 decimals)            │
//! │  7,       7.                       -5  1e3  ,5  (sign, exponent, ...)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The server never relies on this check; it validates every request itself.

use regex::Regex;

/// One to nine ASCII digits, optionally followed by a separator and up to
/// two ASCII digits (the same digits `parse_amount` accepts).
pub const ENTRY_PATTERN: &str = r"^[0-9]{1,9}([.,][0-9]{0,2})?$";

/// Compiled [`ENTRY_PATTERN`].
#[derive(Debug, Clone)]
pub struct EntryPattern {
    regex: Regex,
}

impl EntryPattern {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(EntryPattern {
            regex: Regex::new(ENTRY_PATTERN)?,
        })
    }

    /// Returns true if `input` (ignoring surrounding whitespace) matches.
    pub fn accepts(&self, input: &str) -> bool {
        self.regex.is_match(input.trim())
    }
}
