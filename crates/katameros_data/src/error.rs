//! Error types for dataset loading and validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from loading or validating the bundled reference datasets.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DataError {
    /// Dataset JSON failed to parse.
    Parse(String),
    /// I/O error reading a dataset file.
    Io(String),
    /// Configuration is unusable before any file is touched.
    InvalidConfig(&'static str),
    /// Cross-dataset referential integrity violation. Fatal: the bundled
    /// data has a gap and results would silently degrade.
    Integrity(String),
}

impl Display for DataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "dataset parse error: {msg}"),
            Self::Io(msg) => write!(f, "dataset I/O error: {msg}"),
            Self::InvalidConfig(msg) => write!(f, "invalid dataset config: {msg}"),
            Self::Integrity(msg) => write!(f, "dataset integrity error: {msg}"),
        }
    }
}

impl Error for DataError {}

impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for DataError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
