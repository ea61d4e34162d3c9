//! Error types for the picker core.
//!
//! Interactive input never fails: out-of-range values are clamped and
//! structural violations are no-ops. The only fallible boundary is text,
//! where a typed hex string may be malformed.

use thiserror::Error;

/// Errors that can occur when parsing a hex color string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Nothing left after trimming whitespace and the leading `#`
    #[error("Empty color string")]
    Empty,

    /// Hex colors must have exactly 6 (`RRGGBB`) or 8 (`AARRGGBB`) digits
    #[error("Expected 6 or 8 hex digits, found {0}")]
    InvalidLength(usize),

    /// The string contains a character that is not a hex digit
    #[error("Invalid hex digits in '{0}'")]
    InvalidDigit(String),
}
