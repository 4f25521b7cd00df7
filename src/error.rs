//! Crate-level error types.

use std::fmt;

/// Errors produced by the geoview crate.
///
/// Camera and quaternion math never errors: degenerate inputs are handled
/// by guard clauses that leave prior state unchanged. Only the options
/// layer has fallible I/O.
#[derive(Debug)]
pub enum GeoviewError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for GeoviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for GeoviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for GeoviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
