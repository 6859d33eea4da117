//! CSV parsing with RFC 4180-like behavior

use std::mem;

use super::{ParseOptions, NEWLINE};

/// CSV parser turning a whole document into rows of fields
///
/// Quoting rules, checked in order for each character:
///
/// 1. A quote outside a quoted field opens one. The quote is dropped.
/// 2. Inside a quoted field, a doubled quote yields one literal quote.
/// 3. Inside a quoted field, a quote followed by the separator, a newline or
///    the end of input closes the field. The quote is dropped.
/// 4. A newline outside a quoted field ends the row.
/// 5. The separator outside a quoted field ends the field.
/// 6. Anything else is field content, including separators, newlines and
///    stray quotes inside a quoted field.
///
/// Rule 1 does not check for a field boundary, so `ab"c,d` parses as the
/// single field `abc,d`. Only `\n` ends a row; a preceding `\r` stays in the
/// last field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvParser {
    separator: char,
    quote: char,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::from(ParseOptions::default())
    }
}

impl From<ParseOptions> for CsvParser {
    fn from(options: ParseOptions) -> Self {
        Self::new(options.separator, options.quote)
    }
}

impl CsvParser {
    /// Create a new CSV parser with custom separator and quote character
    pub fn new(separator: char, quote: char) -> Self {
        Self { separator, quote }
    }

    /// Field separator in use
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Quote character in use
    pub fn quote(&self) -> char {
        self.quote
    }

    /// Parse the whole input into rows of fields
    ///
    /// Never fails. The result always holds at least one row with at least
    /// one field, so `""` parses as `[[""]]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use csvgrid::CsvParser;
    ///
    /// let parser = CsvParser::default();
    /// assert_eq!(
    ///     parser.parse("1,\"two, too\",3\n4,5,6"),
    ///     vec![vec!["1", "two, too", "3"], vec!["4", "5", "6"]]
    /// );
    /// ```
    pub fn parse(&self, input: &str) -> Vec<Vec<String>> {
        let mut scan = ScanState::default();
        let mut chars = input.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch == self.quote {
                if !scan.in_quoted_field {
                    scan.in_quoted_field = true;
                    continue;
                }

                let next = chars.peek().copied();
                if next == Some(self.quote) {
                    // Escaped quote ("")
                    scan.field.push(self.quote);
                    chars.next();
                    continue;
                }
                if self.closes_quoted_field(next) {
                    scan.in_quoted_field = false;
                    continue;
                }
            } else if !scan.in_quoted_field {
                if ch == NEWLINE {
                    scan.end_row();
                    continue;
                }
                if ch == self.separator {
                    scan.end_field();
                    continue;
                }
            }

            scan.field.push(ch);
        }

        scan.finish()
    }

    fn closes_quoted_field(&self, next: Option<char>) -> bool {
        match next {
            None => true,
            Some(ch) => ch == self.separator || ch == NEWLINE,
        }
    }
}

/// Per-call scan state, dropped once `parse` returns
#[derive(Debug, Default)]
struct ScanState {
    rows: Vec<Vec<String>>,
    row: Vec<String>,
    field: String,
    in_quoted_field: bool,
}

impl ScanState {
    fn end_field(&mut self) {
        self.row.push(mem::take(&mut self.field));
    }

    fn end_row(&mut self) {
        self.end_field();
        self.rows.push(mem::take(&mut self.row));
    }

    fn finish(mut self) -> Vec<Vec<String>> {
        if self.in_quoted_field {
            tracing::debug!(
                row = self.rows.len(),
                field = self.row.len(),
                "input ended inside a quoted field, keeping accumulated text"
            );
        }

        self.end_row();
        tracing::trace!(rows = self.rows.len(), "parsed CSV input");
        self.rows
    }
}
