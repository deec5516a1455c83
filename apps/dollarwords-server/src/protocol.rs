//! # Wire Protocol
//!
//! One request, one response, one connection.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  bytes from client: b"1234,56\n"                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse_amount ── not UTF-8 / empty / malformed ──► InvalidRequest       │
//! │       │      └── too many digits for a Decimal ──► Rejected             │
//! │       │                                                                 │
//! │       ▼  Decimal 1234.56                                                │
//! │  CurrencyFormatter::format ── ConversionError ──► Rejected              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Words("one thousand two hundred thirty four dollars and ...")          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A malformed request and a rejected amount are different outcomes and are
//! rendered differently; neither is an empty response.

use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use dollarwords_core::{ConversionError, CurrencyFormatter, Range, RangeOutcome, MAX_DECIMAL_DIGITS};

use crate::config::{DecimalSeparator, ProtocolSettings, ResponseFormat};
use crate::error::ServerResult;

// =============================================================================
// Request Parsing
// =============================================================================

/// Why the raw request could not be read as an amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("the request is empty")]
    Empty,

    #[error("the request is not valid UTF-8 text")]
    NotText,

    #[error("'{0}' is not a number")]
    Malformed(String),

    #[error("'{found}' is not an accepted decimal separator (accepted: {accepted})")]
    WrongSeparator {
        found: char,
        accepted: DecimalSeparator,
    },
}

impl ParseError {
    /// Stable machine-readable identifier for the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::Empty => "empty",
            ParseError::NotText => "not_text",
            ParseError::Malformed(_) => "malformed_number",
            ParseError::WrongSeparator { .. } => "wrong_separator",
        }
    }
}

/// Why a request produced no amount to format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The text is not a number.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The text is a number the core would refuse, but it cannot be held
    /// exactly as a `Decimal`.
    #[error(transparent)]
    Rejected(#[from] ConversionError),
}

/// Parses the raw request bytes into an amount.
///
/// Whitespace and NUL padding around the number are ignored. The only
/// accepted characters are an optional leading sign, ASCII digits, and at
/// most one decimal separator allowed by `separator`. Sign and precision
/// are left for the core to judge, except for numbers too long to be held
/// exactly: those are refused here with the error the core would give.
pub fn parse_amount(raw: &[u8], separator: DecimalSeparator) -> Result<Decimal, RequestError> {
    let text = std::str::from_utf8(raw).map_err(|_| ParseError::NotText)?;
    let text = text.trim_matches(|c: char| c.is_whitespace() || c == '\0');

    if text.is_empty() {
        return Err(ParseError::Empty.into());
    }

    let malformed = || RequestError::from(ParseError::Malformed(text.to_string()));

    let negative = text.starts_with('-');
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let mut separators = unsigned.chars().filter(|c| !c.is_ascii_digit());

    match (separators.next(), separators.next()) {
        (None, _) => {}
        (Some(c @ ('.' | ',')), None) => {
            if !separator.accepts(c) {
                return Err(ParseError::WrongSeparator {
                    found: c,
                    accepted: separator,
                }
                .into());
            }
        }
        _ => return Err(malformed()),
    }

    if !unsigned.chars().any(|c| c.is_ascii_digit()) {
        return Err(malformed());
    }

    // Leading and trailing zeros carry no value; "7," has no cents typed yet
    let (whole, fraction) = unsigned.split_once(['.', ',']).unwrap_or((unsigned, ""));
    let whole = whole.trim_start_matches('0');
    let fraction = fraction.trim_end_matches('0');

    let mut canonical = String::with_capacity(unsigned.len() + 2);
    if negative {
        canonical.push('-');
    }
    canonical.push_str(if whole.is_empty() { "0" } else { whole });
    if !fraction.is_empty() {
        canonical.push('.');
        canonical.push_str(fraction);
    }

    Decimal::from_str_exact(&canonical).map_err(|_| unrepresentable(negative, fraction).into())
}

/// Rejection for a non-zero number with more significant digits than a
/// `Decimal` holds. Checked in the same order as `MonetaryAmount::try_from`.
fn unrepresentable(negative: bool, fraction: &str) -> ConversionError {
    if negative {
        ConversionError::NegativeAmount
    } else if fraction.len() > MAX_DECIMAL_DIGITS as usize {
        ConversionError::TooManyDecimalDigits {
            digits: u32::try_from(fraction.len()).unwrap_or(u32::MAX),
        }
    } else {
        ConversionError::ValueOutOfRange {
            outcome: RangeOutcome::AboveMax,
            range: Range::DOLLARS,
            value: u64::MAX,
        }
    }
}

// =============================================================================
// Response
// =============================================================================

/// Outcome of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// The amount in words.
    Words(String),
    /// The request was not a readable amount.
    InvalidRequest(ParseError),
    /// The amount was read but the core refused it.
    Rejected(ConversionError),
}

impl Response {
    /// Computes the response for a raw request.
    pub fn for_request<F>(formatter: &F, raw: &[u8], settings: &ProtocolSettings) -> Self
    where
        F: CurrencyFormatter + ?Sized,
    {
        match parse_amount(raw, settings.decimal_separator) {
            Ok(amount) => match formatter.format(amount) {
                Ok(words) => Response::Words(words),
                Err(e) => Response::Rejected(e),
            },
            Err(RequestError::Parse(e)) => Response::InvalidRequest(e),
            Err(RequestError::Rejected(e)) => Response::Rejected(e),
        }
    }

    /// Returns true if the response carries words.
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Words(_))
    }

    /// Renders the response body.
    pub fn render(&self, format: ResponseFormat) -> ServerResult<String> {
        match format {
            ResponseFormat::Text => Ok(self.render_text()),
            ResponseFormat::Json => Ok(serde_json::to_string(&self.body())?),
        }
    }

    fn render_text(&self) -> String {
        match self {
            Response::Words(words) => words.clone(),
            Response::InvalidRequest(e) => format!("invalid request: {e}"),
            Response::Rejected(e) => format!("conversion failed: {e}"),
        }
    }

    fn body(&self) -> Body<'_> {
        match self {
            Response::Words(words) => Body::Ok { words },
            Response::InvalidRequest(e) => Body::Error {
                kind: e.kind(),
                message: e.to_string(),
                range: None,
                value: None,
            },
            Response::Rejected(e) => {
                let (range, value) = match e {
                    ConversionError::ValueOutOfRange { range, value, .. } => {
                        (Some(*range), Some(*value))
                    }
                    _ => (None, None),
                };
                Body::Error {
                    kind: e.kind(),
                    message: e.to_string(),
                    range,
                    value,
                }
            }
        }
    }
}

/// JSON shape of a response.
#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum Body<'a> {
    Ok {
        words: &'a str,
    },
    Error {
        kind: &'static str,
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        range: Option<Range>,
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<u64>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use dollarwords_core::DollarFormatter;
    use rust_decimal_macros::dec;

    fn respond(raw: &str) -> Response {
        Response::for_request(&DollarFormatter, raw.as_bytes(), &ProtocolSettings::default())
    }

    #[test]
    fn test_parse_dot_and_comma() {
        assert_eq!(parse_amount(b"12.50", DecimalSeparator::Either), Ok(dec!(12.50)));
        assert_eq!(parse_amount(b"12,50", DecimalSeparator::Either), Ok(dec!(12.50)));
        assert_eq!(parse_amount(b"12,50", DecimalSeparator::Comma), Ok(dec!(12.50)));
        assert_eq!(parse_amount(b"7", DecimalSeparator::Dot), Ok(dec!(7)));
        assert_eq!(parse_amount(b"7,", DecimalSeparator::Either), Ok(dec!(7)));
    }

    #[test]
    fn test_parse_trims_padding() {
        assert_eq!(parse_amount(b"  42\r\n", DecimalSeparator::Either), Ok(dec!(42)));
        assert_eq!(parse_amount(b"3.5\0\0\0", DecimalSeparator::Either), Ok(dec!(3.5)));
    }

    #[test]
    fn test_parse_keeps_sign_and_precision_for_the_core() {
        assert_eq!(parse_amount(b"-5", DecimalSeparator::Either), Ok(dec!(-5)));
        assert_eq!(parse_amount(b"1.998", DecimalSeparator::Either), Ok(dec!(1.998)));
    }

    #[test]
    fn test_parse_failures() {
        assert_eq!(parse_amount(b"", DecimalSeparator::Either), Err(ParseError::Empty.into()));
        assert_eq!(parse_amount(b" \n", DecimalSeparator::Either), Err(ParseError::Empty.into()));
        assert_eq!(parse_amount(&[0xff, 0xfe], DecimalSeparator::Either), Err(ParseError::NotText.into()));
        assert!(matches!(
            parse_amount(b"abc", DecimalSeparator::Either),
            Err(RequestError::Parse(ParseError::Malformed(_)))
        ));
        assert!(matches!(
            parse_amount(b"1,000.50", DecimalSeparator::Either),
            Err(RequestError::Parse(ParseError::Malformed(_)))
        ));
        assert!(matches!(
            parse_amount(b"1e5", DecimalSeparator::Either),
            Err(RequestError::Parse(ParseError::Malformed(_)))
        ));
        assert!(matches!(
            parse_amount(b"-", DecimalSeparator::Either),
            Err(RequestError::Parse(ParseError::Malformed(_)))
        ));
    }

    #[test]
    fn test_parse_wrong_separator() {
        assert_eq!(
            parse_amount(b"12,50", DecimalSeparator::Dot),
            Err(ParseError::WrongSeparator {
                found: ',',
                accepted: DecimalSeparator::Dot
            }
            .into())
        );
        assert!(matches!(
            parse_amount(b"12.50", DecimalSeparator::Comma),
            Err(RequestError::Parse(ParseError::WrongSeparator { found: '.', .. }))
        ));
    }

    #[test]
    fn test_parse_ignores_insignificant_zeros() {
        let zeros = format!("0.{}", "0".repeat(40));
        assert_eq!(parse_amount(zeros.as_bytes(), DecimalSeparator::Either), Ok(dec!(0)));

        let padded = format!("{}12.50{}", "0".repeat(40), "0".repeat(40));
        assert_eq!(parse_amount(padded.as_bytes(), DecimalSeparator::Either), Ok(dec!(12.5)));
    }

    #[test]
    fn test_parse_refuses_precision_beyond_decimal() {
        assert_eq!(
            parse_amount(b"1.000000000000000000000000000001", DecimalSeparator::Either),
            Err(ConversionError::TooManyDecimalDigits { digits: 30 }.into())
        );
        assert_eq!(
            parse_amount(b"0.0000000000000000000000000000001", DecimalSeparator::Either),
            Err(ConversionError::TooManyDecimalDigits { digits: 31 }.into())
        );
        assert_eq!(
            parse_amount(b"-1.000000000000000000000000000001", DecimalSeparator::Either),
            Err(ConversionError::NegativeAmount.into())
        );
    }

    #[test]
    fn test_parse_refuses_whole_part_beyond_decimal() {
        assert_eq!(
            parse_amount(b"99999999999999999999999999999999", DecimalSeparator::Either),
            Err(ConversionError::ValueOutOfRange {
                outcome: RangeOutcome::AboveMax,
                range: Range::DOLLARS,
                value: u64::MAX,
            }
            .into())
        );
    }

    #[test]
    fn test_unrepresentable_numbers_are_rejections() {
        assert_eq!(
            respond("1.000000000000000000000000000001"),
            Response::Rejected(ConversionError::TooManyDecimalDigits { digits: 30 })
        );
        assert_eq!(
            respond("0.0000000000000000000000000000001")
                .render(ResponseFormat::Text)
                .unwrap(),
            "conversion failed: The amount must not have more than 2 decimal digits (got 31)"
        );

        let body = respond("99999999999999999999999999999999")
            .render(ResponseFormat::Json)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["kind"], "value_out_of_range");
        assert_eq!(value["range"]["max"], 999_999_999);
    }

    #[test]
    fn test_text_responses() {
        assert_eq!(
            respond("1234,56").render(ResponseFormat::Text).unwrap(),
            "one thousand two hundred thirty four dollars and fifty six cents"
        );
        assert_eq!(
            respond("-5").render(ResponseFormat::Text).unwrap(),
            "conversion failed: The amount must not be negative"
        );
        assert_eq!(
            respond("five").render(ResponseFormat::Text).unwrap(),
            "invalid request: 'five' is not a number"
        );
    }

    #[test]
    fn test_parse_failure_and_rejection_stay_distinct() {
        assert!(matches!(respond("x"), Response::InvalidRequest(_)));
        assert!(matches!(
            respond("1.998"),
            Response::Rejected(ConversionError::TooManyDecimalDigits { digits: 3 })
        ));
        assert!(respond("0.01").is_success());
    }

    #[test]
    fn test_json_success() {
        let body = respond("1").render(ResponseFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["words"], "one dollar");
    }

    #[test]
    fn test_json_out_of_range_carries_context() {
        let body = respond("1000000000").render(ResponseFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["status"], "error");
        assert_eq!(value["kind"], "value_out_of_range");
        assert_eq!(value["range"]["max"], 999_999_999);
        assert_eq!(value["value"], 1_000_000_000u64);
    }

    #[test]
    fn test_json_parse_error_has_no_range() {
        let body = respond("").render(ResponseFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["kind"], "empty");
        assert!(value.get("range").is_none());
    }
}
