//! Separator and quote configuration

use super::{DEFAULT_QUOTE, DEFAULT_SEPARATOR};
use crate::error::{CsvError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Characters that drive field and quote recognition
///
/// Both values are plain characters compared by equality, so anything is
/// accepted here, including `.`, `$` or `\`.
///
/// # Examples
///
/// ```
/// use csvgrid::ParseOptions;
///
/// let options = ParseOptions::tsv().quote('\'');
/// assert_eq!(options.separator, '\t');
/// assert_eq!(options.quote, '\'');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParseOptions {
    /// Character separating fields within a row
    pub separator: char,
    /// Character opening and closing quoted fields
    pub quote: char,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            quote: DEFAULT_QUOTE,
        }
    }
}

impl ParseOptions {
    /// Comma separated, double-quoted
    pub fn csv() -> Self {
        Self::default()
    }

    /// Tab separated, double-quoted
    pub fn tsv() -> Self {
        Self {
            separator: '\t',
            ..Self::default()
        }
    }

    /// Set the separator (builder pattern)
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Set the quote character (builder pattern)
    pub fn quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Resolve options from optional string values
    ///
    /// `None` and `""` fall back to the defaults. Anything longer than one
    /// character is rejected, as is a separator equal to the quote.
    ///
    /// # Examples
    ///
    /// ```
    /// use csvgrid::{CsvError, ParseOptions};
    ///
    /// let options = ParseOptions::from_strs(Some(";"), None).unwrap();
    /// assert_eq!(options, ParseOptions::csv().separator(';'));
    ///
    /// assert_eq!(
    ///     ParseOptions::from_strs(Some("::"), None),
    ///     Err(CsvError::InvalidSeparator("::".to_string()))
    /// );
    /// ```
    pub fn from_strs(separator: Option<&str>, quote: Option<&str>) -> Result<Self> {
        let separator = single_char(separator, DEFAULT_SEPARATOR)
            .ok_or_else(|| CsvError::InvalidSeparator(separator.unwrap_or_default().to_string()))?;
        let quote = single_char(quote, DEFAULT_QUOTE)
            .ok_or_else(|| CsvError::InvalidQuote(quote.unwrap_or_default().to_string()))?;

        if separator == quote {
            return Err(CsvError::ConflictingCharacters(separator));
        }

        Ok(Self { separator, quote })
    }
}

/// `None` when the value holds more than one character
fn single_char(value: Option<&str>, default: char) -> Option<char> {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return Some(default);
    };

    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}
