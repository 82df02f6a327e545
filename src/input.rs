//! Parsing boundary between raw user text and typed formula inputs.
//!
//! Formula functions assume finite numeric arguments. Everything arriving
//! as text (form fields, CSV cells, CLI arguments) crosses this boundary
//! first, so malformed input fails here with the field name attached
//! instead of leaking into a calculation.

use thiserror::Error;

use crate::ledger::ActivityKind;
use crate::math::Scalar;

/// Errors raised while converting raw text into typed values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Raised when a required field is blank.
    #[error("{0} must not be blank")]
    Blank(&'static str),
    /// Raised when a field cannot be read as a finite real number.
    #[error("{field}: `{raw}` is not a number")]
    NotANumber {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected input text.
        raw: String,
    },
    /// Raised when a field cannot be read as a whole month count.
    #[error("{field}: `{raw}` is not a whole month count")]
    NotAMonthCount {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected input text.
        raw: String,
    },
    /// Raised when a field does not name a known activity kind.
    #[error("{field}: `{raw}` is not an activity kind")]
    UnknownKind {
        /// Name of the offending field.
        field: &'static str,
        /// Rejected input text.
        raw: String,
    },
}

/// Parses a required real-valued field.
///
/// Surrounding whitespace is ignored. Blank input and anything that does
/// not read as a finite number fail.
pub fn parse_scalar(field: &'static str, raw: &str) -> Result<Scalar, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Blank(field));
    }
    let value: Scalar = trimmed.parse().map_err(|_| ParseError::NotANumber {
        field,
        raw: trimmed.to_string(),
    })?;
    // f64::from_str accepts "NaN" and "inf"; neither may reach a formula.
    if !value.is_finite() {
        return Err(ParseError::NotANumber {
            field,
            raw: trimmed.to_string(),
        });
    }
    Ok(value)
}

/// Parses a required whole month count.
///
/// Negative and fractional durations fail; month counts are whole and
/// non-negative by construction.
pub fn parse_months(field: &'static str, raw: &str) -> Result<u32, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Blank(field));
    }
    trimmed.parse().map_err(|_| ParseError::NotAMonthCount {
        field,
        raw: trimmed.to_string(),
    })
}

/// Parses a required free-text label, trimming surrounding whitespace.
pub fn parse_label(field: &'static str, raw: &str) -> Result<String, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Blank(field));
    }
    Ok(trimmed.to_string())
}

/// Parses an activity kind from its lowercase label.
///
/// Accepts `income`, `expense`, `investment`, and `savings` in any letter
/// case.
pub fn parse_kind(field: &'static str, raw: &str) -> Result<ActivityKind, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Blank(field));
    }
    match trimmed.to_ascii_lowercase().as_str() {
        "income" => Ok(ActivityKind::Income),
        "expense" => Ok(ActivityKind::Expense),
        "investment" => Ok(ActivityKind::Investment),
        "savings" => Ok(ActivityKind::Savings),
        _ => Err(ParseError::UnknownKind {
            field,
            raw: trimmed.to_string(),
        }),
    }
}
