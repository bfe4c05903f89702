//! Error types for reading resolution.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the day → reading-ID table lookup.
///
/// Both variants are data-integrity faults, not user errors: a valid
/// Coptic date against a complete dataset can never hit them. Callers
/// should propagate and alert, never swallow.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReadingsError {
    /// The day-readings table has no entry for this Coptic month.
    MonthNotFound(u32),
    /// The table has no reading for this day, or the reading ID has no
    /// record.
    ReadingNotFound { month: u32, day: u32 },
}

impl Display for ReadingsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MonthNotFound(month) => {
                write!(f, "day-readings table missing Coptic month {month}")
            }
            Self::ReadingNotFound { month, day } => {
                write!(f, "no reading record for Coptic month {month}, day {day}")
            }
        }
    }
}

impl Error for ReadingsError {}
