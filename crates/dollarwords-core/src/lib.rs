//! # dollarwords-core: Monetary Amounts in Words
//!
//! This crate is the **heart** of dollarwords. It renders a non-negative
//! amount of dollars and cents as English words, as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       dollarwords Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │               dollarwords-client (entry pattern check)          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ TCP, one request per connection       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               dollarwords-server (parse, respond)               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Decimal                                │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ dollarwords-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐   │   │
//! │  │   │ currency │─►│  words   │─►│magnitude │  │    range     │   │   │
//! │  │   │ Dollar-  │  │ convert  │  │ classify │  │   validate   │   │   │
//! │  │   │ Formatter│  │          │─►│          │  │              │   │   │
//! │  │   └────┬─────┘  └────┬─────┘  └──────────┘  └──────▲───────┘   │   │
//! │  │        │             └─────────────────────────────┘           │   │
//! │  │        ▼                                                       │   │
//! │  │   ┌──────────┐                                                 │   │
//! │  │   │  amount  │  sign + precision checks, (dollars, cents) split│   │
//! │  │   └──────────┘                                                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO SHARED STATE • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`range`] - Inclusive bounds and the three-way range check
//! - [`magnitude`] - Structural classification of an integer
//! - [`words`] - Recursive integer-to-words engine and its lookup tables
//! - [`amount`] - Decimal amount validation and dollars/cents split
//! - [`currency`] - Sentence assembly with "dollar(s)" / "cent(s)"
//! - [`error`] - Conversion error type
//!
//! ## Example Usage
//!
//! ```rust
//! use rust_decimal::Decimal;
//! use dollarwords_core::currency;
//!
//! let amount = Decimal::new(123456, 2); // 1234.56
//! assert_eq!(
//!     currency::format(amount).unwrap(),
//!     "one thousand two hundred thirty four dollars and fifty six cents"
//! );
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod amount;
pub mod currency;
pub mod error;
pub mod magnitude;
pub mod range;
pub mod words;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use amount::MonetaryAmount;
pub use currency::{CurrencyFormatter, DollarFormatter};
pub use error::{ConversionError, ConversionResult};
pub use magnitude::Magnitude;
pub use range::{Range, RangeOutcome};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Largest whole-dollar value that can be spelled out.
pub const MAX_DOLLARS: u64 = 999_999_999;

/// Largest cents value (the fractional part is always two digits).
pub const MAX_CENTS: u64 = 99;

/// Maximum number of fractional digits an amount may carry.
pub const MAX_DECIMAL_DIGITS: u32 = 2;
