//! Error types for csvgrid
//!
//! Parsing itself never fails. Errors only come from building [`ParseOptions`]
//! out of untrusted string values.
//!
//! [`ParseOptions`]: crate::csv::ParseOptions

use thiserror::Error;

/// Errors raised while resolving parser configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CsvError {
    /// Separator must be exactly one character
    #[error("Invalid separator {0:?}: expected a single character")]
    InvalidSeparator(String),

    /// Quote must be exactly one character
    #[error("Invalid quote {0:?}: expected a single character")]
    InvalidQuote(String),

    /// Separator and quote resolved to the same character
    #[error("Separator and quote must differ, both are {0:?}")]
    ConflictingCharacters(char),
}

/// Result type alias for csvgrid operations
pub type Result<T> = std::result::Result<T, CsvError>;
