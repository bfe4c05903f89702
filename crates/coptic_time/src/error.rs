//! Error types for calendar conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from date validation or Gregorian/Coptic conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DateError {
    /// Field values do not form a real calendar date.
    InvalidDate(String),
    /// Date is outside the supported range (0284-08-29 through 9999-12-31).
    OutOfRange(String),
}

impl Display for DateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::OutOfRange(msg) => write!(f, "date out of supported range: {msg}"),
        }
    }
}

impl Error for DateError {}
