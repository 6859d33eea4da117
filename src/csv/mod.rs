//! CSV configuration and parsing

mod options;
mod parser;

pub use options::ParseOptions;
pub use parser::CsvParser;

/// Default field separator
pub const DEFAULT_SEPARATOR: char = ',';

/// Default quote character
pub const DEFAULT_QUOTE: char = '"';

/// The only character that ends a row
pub(crate) const NEWLINE: char = '\n';
