//! # csvgrid
//!
//! Single-pass CSV parser. Takes the full text of a document and returns its
//! rows, each row a list of raw string fields.
//!
//! ## Features
//!
//! - Configurable single-character separator and quote (any character,
//!   including `.`, `$` and `\`)
//! - RFC 4180 style quoting: embedded separators, embedded newlines and
//!   doubled quotes
//! - Ragged rows, empty fields and empty input are kept as-is
//! - Never fails: malformed quoting is absorbed instead of rejected
//!
//! ## Quick Start
//!
//! ```
//! let rows = csvgrid::parse("1,2,3\n4,\"five, 5\",6");
//! assert_eq!(rows, vec![vec!["1", "2", "3"], vec!["4", "five, 5", "6"]]);
//!
//! let rows = csvgrid::parse_with("1.2.3\n4.5.6", '.', '"');
//! assert_eq!(rows, vec![vec!["1", "2", "3"], vec!["4", "5", "6"]]);
//! ```
//!
//! Fields are never trimmed, typed or validated. Only `\n` ends a row.

pub mod csv;
pub mod error;

pub use csv::{CsvParser, ParseOptions, DEFAULT_QUOTE, DEFAULT_SEPARATOR};
pub use error::{CsvError, Result};

/// One parsed row
pub type Row = Vec<String>;

/// All parsed rows, in input order
pub type Grid = Vec<Row>;

/// Parse with `,` as separator and `"` as quote
pub fn parse(input: &str) -> Grid {
    CsvParser::default().parse(input)
}

/// Parse with a custom separator and quote
pub fn parse_with(input: &str, separator: char, quote: char) -> Grid {
    CsvParser::new(separator, quote).parse(input)
}

/// Parse with prepared [`ParseOptions`]
///
/// ```
/// use csvgrid::ParseOptions;
///
/// let options = ParseOptions::tsv();
/// assert_eq!(
///     csvgrid::parse_with_options("a\tb", &options),
///     vec![vec!["a", "b"]]
/// );
/// ```
pub fn parse_with_options(input: &str, options: &ParseOptions) -> Grid {
    CsvParser::from(*options).parse(input)
}
