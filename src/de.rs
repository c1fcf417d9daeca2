//! Matrix parsing.
//!
//! The parser is a delimiter-driven state machine over the trimmed
//! delimiters of a [`MatrixFormat`]. Whitespace is skipped before every
//! delimiter and number attempt and is never required.
//!
//! ## Rollback
//!
//! Parsing is all-or-nothing. Any failure restores the cursor to the index it
//! held when the call started and records the offset where the text diverged
//! from the layout. There is no recovery at row boundaries.
//!
//! ## Embedded matrices
//!
//! [`MatrixFormat::parse_at`] starts at an arbitrary offset and stops right
//! after the closing suffix, so a matrix can be read out of a larger text:
//!
//! ```rust
//! use matrix_format::{MatrixFormat, ParsePosition};
//!
//! let format = MatrixFormat::default();
//! let text = "a = {{1, 2}, {3, 4}}; b = 5";
//!
//! let mut pos = ParsePosition::new(3);
//! let rows = format.parse_at(text, &mut pos).unwrap();
//! assert_eq!(rows, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
//! assert_eq!(&text[pos.index()..], "; b = 5");
//! ```

use crate::options::Delimiter;
use crate::position::ParsePosition;
use crate::{Error, Matrix, MatrixFormat, Result};

/// Why the state machine gave up. Only used for diagnostics; callers see a
/// `None` or an [`Error::MatrixParse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Rejection {
    reason: &'static str,
}

impl Rejection {
    const fn new(reason: &'static str) -> Self {
        Rejection { reason }
    }
}

type Step<T> = std::result::Result<T, Rejection>;

struct Parser<'a, 'p> {
    format: &'a MatrixFormat,
    input: &'a str,
    pos: &'p mut ParsePosition,
    start: usize,
}

impl<'a, 'p> Parser<'a, 'p> {
    fn new(format: &'a MatrixFormat, input: &'a str, pos: &'p mut ParsePosition) -> Self {
        let start = pos.index();
        Parser {
            format,
            input,
            pos,
            start,
        }
    }

    /// Unconsumed input, empty if the cursor is past the end or not on a
    /// char boundary.
    fn rest(&self) -> &'a str {
        self.input.get(self.pos.index()..).unwrap_or("")
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        let skipped = rest.len() - rest.trim_start().len();
        self.pos.advance(skipped);
    }

    /// Consumes `text` if the input continues with it.
    fn consume(&mut self, text: &str) -> bool {
        if self.rest().starts_with(text) {
            self.pos.advance(text.len());
            true
        } else {
            false
        }
    }

    /// Tries an optional delimiter; `None` always matches.
    fn try_delimiter(&mut self, delimiter: &Delimiter) -> bool {
        match delimiter {
            Delimiter::None => true,
            Delimiter::Literal(text) => self.consume(text),
        }
    }

    /// Matches a required delimiter or rejects at the current offset.
    fn expect(&mut self, delimiter: &Delimiter, reason: &'static str) -> Step<()> {
        if self.try_delimiter(delimiter) {
            Ok(())
        } else {
            self.pos.set_error_index(self.pos.index());
            Err(Rejection::new(reason))
        }
    }

    /// Decides whether another row follows a closed row.
    ///
    /// Without a row separator the next row is only entered when its row
    /// prefix is already in sight, otherwise the closing suffix would be
    /// mistaken for a malformed row.
    fn starts_next_row(&mut self) -> bool {
        let format = self.format;
        match (format.trimmed_row_separator(), format.trimmed_row_prefix()) {
            (Delimiter::Literal(separator), _) => self.consume(separator),
            // Unlike other empty delimiters, an empty row separator does not
            // match unconditionally here; it needs the next row prefix ahead
            (Delimiter::None, Delimiter::Literal(row_prefix)) => {
                self.rest().starts_with(row_prefix.as_str())
            }
            (Delimiter::None, Delimiter::None) => true,
        }
    }

    fn parse(mut self) -> Option<Vec<Vec<f64>>> {
        let error_on_entry = self.pos.error_index();

        match self.parse_rows() {
            Ok(rows) => {
                // Probing for the end of the matrix is not an error
                match error_on_entry {
                    Some(index) => self.pos.set_error_index(index),
                    None => self.pos.clear_error(),
                }
                Some(rows)
            }
            Err(rejection) => {
                tracing::trace!(
                    start = self.start,
                    error_index = ?self.pos.error_index(),
                    reason = rejection.reason,
                    "matrix text rejected"
                );
                self.pos.set_index(self.start);
                None
            }
        }
    }

    fn parse_rows(&mut self) -> Step<Vec<Vec<f64>>> {
        let format = self.format;
        let number_format = format.number_format();

        self.skip_whitespace();
        self.expect(format.trimmed_prefix(), "expected prefix")?;

        let mut rows: Vec<Vec<f64>> = Vec::new();
        let mut row: Vec<f64> = Vec::new();
        loop {
            self.skip_whitespace();
            if row.is_empty() {
                self.expect(format.trimmed_row_prefix(), "expected row prefix")?;
            } else if !self.try_delimiter(format.trimmed_column_separator()) {
                self.expect(format.trimmed_row_suffix(), "expected row suffix")?;
                self.skip_whitespace();
                if self.starts_next_row() {
                    rows.push(std::mem::take(&mut row));
                    continue;
                }
                break;
            }

            self.skip_whitespace();
            match number_format.parse(self.input, self.pos) {
                Some(value) => row.push(value),
                // Nothing opened yet, so this is the end of the matrix
                None if row.is_empty() => break,
                // The number format already recorded the error offset
                None => return Err(Rejection::new("malformed number")),
            }
        }

        if !row.is_empty() {
            rows.push(row);
        }

        self.skip_whitespace();
        self.expect(format.trimmed_suffix(), "expected suffix")?;

        if rows.is_empty() {
            self.pos.set_error_index(self.start);
            return Err(Rejection::new("empty matrix"));
        }

        Ok(rows)
    }
}

impl MatrixFormat {
    /// Parses a matrix starting at the cursor.
    ///
    /// On success the cursor is left just after the closing suffix and the
    /// rows are returned; trailing text is not examined. On failure `None`
    /// is returned, the cursor index is restored and
    /// [`ParsePosition::error_index`] holds the offset of the mismatch.
    ///
    /// Rows are not required to have equal lengths; see
    /// [`MatrixFormat::parse_matrix`] for a rectangular result.
    pub fn parse_at(&self, text: &str, pos: &mut ParsePosition) -> Option<Vec<Vec<f64>>> {
        Parser::new(self, text, pos).parse()
    }

    /// Parses a matrix at the start of `text`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MatrixParse`] with the text and the error offset
    /// when no matrix could be read from position 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use matrix_format::{Error, MatrixFormat};
    ///
    /// let format = MatrixFormat::default();
    /// assert_eq!(format.parse("{{42}}").unwrap(), vec![vec![42.0]]);
    ///
    /// let err = format.parse("{{1,2,x}}").unwrap_err();
    /// assert_eq!(err.index(), Some(6));
    /// ```
    pub fn parse(&self, text: &str) -> Result<Vec<Vec<f64>>> {
        let mut pos = ParsePosition::new(0);
        self.parse_at(text, &mut pos)
            .ok_or_else(|| Error::matrix_parse(text, pos.error_index().unwrap_or(0)))
    }

    /// Parses a matrix at the start of `text` into a rectangular [`Matrix`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MatrixParse`] for unparseable text and
    /// [`Error::RaggedRows`] when rows differ in length.
    pub fn parse_matrix(&self, text: &str) -> Result<Matrix> {
        Matrix::from_rows(self.parse(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatrixFormatOptions;

    fn parse_default(text: &str) -> Result<Vec<Vec<f64>>> {
        MatrixFormat::default().parse(text)
    }

    fn custom(options: MatrixFormatOptions) -> MatrixFormat {
        MatrixFormat::new(options).unwrap()
    }

    #[test]
    fn test_parse_default() {
        assert_eq!(
            parse_default("{{1,2,3},{4,5,6}}").unwrap(),
            vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]
        );
    }

    #[test]
    fn test_parse_single_value() {
        assert_eq!(parse_default("{{42}}").unwrap(), vec![vec![42.0]]);
    }

    #[test]
    fn test_parse_ignores_whitespace() {
        let spaced = " \t{ \n{ 1 ,\t2 } ,\r\n{ 3 , 4 }\u{00a0}} ";
        assert_eq!(
            parse_default(spaced).unwrap(),
            vec![vec![1.0, 2.0], vec![3.0, 4.0]]
        );
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(parse_default("").is_err());
        assert!(parse_default("   ").is_err());
        assert!(parse_default("{}").is_err());
        assert!(parse_default("{{}}").is_err());
    }

    #[test]
    fn test_parse_empty_matrix_keeps_cursor() {
        let format = MatrixFormat::default();
        let mut pos = ParsePosition::new(2);
        assert_eq!(format.parse_at("x {{}} y", &mut pos), None);
        assert_eq!(pos.index(), 2);
        assert!(pos.error_index().is_some());
    }

    #[test]
    fn test_parse_malformed_entry() {
        let format = MatrixFormat::default();
        let mut pos = ParsePosition::new(0);
        assert_eq!(format.parse_at("{{1,2,x}}", &mut pos), None);
        assert_eq!(pos.index(), 0);
        assert_eq!(pos.error_index(), Some(6));
    }

    #[test]
    fn test_parse_malformed_entry_in_later_row() {
        // No recovery at row boundaries: the first row is not kept
        let err = parse_default("{{1,2},{3,?}}").unwrap_err();
        assert_eq!(err, Error::matrix_parse("{{1,2},{3,?}}", 10));
    }

    #[test]
    fn test_parse_missing_prefix() {
        let err = parse_default("  [[1]]").unwrap_err();
        assert_eq!(err.index(), Some(2));
    }

    #[test]
    fn test_parse_missing_row_prefix() {
        let err = parse_default("{1,2}").unwrap_err();
        assert_eq!(err.index(), Some(1));
    }

    #[test]
    fn test_parse_missing_row_suffix() {
        let err = parse_default("{{1,2 3}}").unwrap_err();
        assert_eq!(err.index(), Some(6));
    }

    #[test]
    fn test_parse_unterminated() {
        let format = MatrixFormat::default();
        let mut pos = ParsePosition::new(0);
        assert_eq!(format.parse_at("{{1,2},{3,4}", &mut pos), None);
        assert_eq!(pos.index(), 0);
        assert_eq!(pos.error_index(), Some(12));
    }

    #[test]
    fn test_parse_stops_after_suffix() {
        let format = MatrixFormat::default();
        let mut pos = ParsePosition::new(0);
        let rows = format.parse_at("{{1,2}} trailing text", &mut pos).unwrap();
        assert_eq!(rows, vec![vec![1.0, 2.0]]);
        assert_eq!(pos.index(), 7);
        assert_eq!(pos.error_index(), None);
    }

    #[test]
    fn test_parse_at_offset() {
        let format = MatrixFormat::default();
        let text = "ab{{5}}cd";
        let mut pos = ParsePosition::new(2);
        assert_eq!(format.parse_at(text, &mut pos), Some(vec![vec![5.0]]));
        assert_eq!(pos.index(), 7);

        let mut pos = ParsePosition::new(0);
        assert_eq!(format.parse_at(text, &mut pos), None);
        assert_eq!(pos.index(), 0);
        assert_eq!(pos.error_index(), Some(0));
    }

    #[test]
    fn test_parse_cursor_out_of_range() {
        let format = MatrixFormat::default();
        let mut pos = ParsePosition::new(100);
        assert_eq!(format.parse_at("{{1}}", &mut pos), None);
        assert_eq!(pos.index(), 100);
    }

    #[test]
    fn test_parse_ragged_rows() {
        let rows = parse_default("{{1,2,3},{4}}").unwrap();
        assert_eq!(rows, vec![vec![1.0, 2.0, 3.0], vec![4.0]]);

        let err = MatrixFormat::default()
            .parse_matrix("{{1,2,3},{4}}")
            .unwrap_err();
        assert_eq!(err, Error::ragged_rows(1, 3, 1));
    }

    #[test]
    fn test_parse_matrix() {
        let m = MatrixFormat::default().parse_matrix("{{1,2},{3,4}}").unwrap();
        assert_eq!(m.get(1, 1), Some(4.0));
    }

    #[test]
    fn test_parse_custom_delimiters() {
        let format = custom(
            MatrixFormatOptions::new()
                .with_prefix("[")
                .with_suffix("]")
                .with_row_separator(";")
                .with_column_separator(", "),
        );
        assert_eq!(
            format.parse("[{1, 2};{3, 4}]").unwrap(),
            vec![vec![1.0, 2.0], vec![3.0, 4.0]]
        );
        assert_eq!(
            format.parse("[ {1,2} ; {3,4} ]").unwrap(),
            vec![vec![1.0, 2.0], vec![3.0, 4.0]]
        );
    }

    #[test]
    fn test_parse_without_row_delimiters() {
        let format = custom(
            MatrixFormatOptions::new()
                .with_prefix("[")
                .with_suffix("]")
                .with_row_prefix("")
                .with_row_suffix("")
                .with_row_separator("; ")
                .with_column_separator(" , "),
        );
        assert_eq!(
            format.parse("[1,2;3,4]").unwrap(),
            vec![vec![1.0, 2.0], vec![3.0, 4.0]]
        );
        // A trailing row separator ends the matrix naturally
        assert_eq!(format.parse("[1,2;]").unwrap(), vec![vec![1.0, 2.0]]);
    }

    #[test]
    fn test_parse_without_row_separator() {
        let format = custom(MatrixFormatOptions::new().with_row_separator(""));
        assert_eq!(
            format.parse("{{1,2}{3,4}}").unwrap(),
            vec![vec![1.0, 2.0], vec![3.0, 4.0]]
        );
        assert_eq!(format.parse("{ {1} }").unwrap(), vec![vec![1.0]]);
    }

    #[test]
    fn test_parse_whitespace_separated_rows() {
        let format = custom(
            MatrixFormatOptions::new()
                .with_prefix("<")
                .with_suffix(">")
                .with_row_prefix("")
                .with_row_suffix("")
                .with_row_separator("")
                .with_column_separator(","),
        );
        assert_eq!(
            format.parse("<1,2 3,4>").unwrap(),
            vec![vec![1.0, 2.0], vec![3.0, 4.0]]
        );
    }

    #[test]
    fn test_parse_multi_character_delimiters() {
        let format = custom(
            MatrixFormatOptions::new()
                .with_prefix("matrix(")
                .with_suffix(")")
                .with_row_prefix("row(")
                .with_row_suffix(")")
                .with_row_separator(" | ")
                .with_column_separator(" :: "),
        );
        let m = [[1.5, -2.0], [3.0, 4.25]];
        let text = format.format(&m);
        assert_eq!(text, "matrix(row(1.5 :: -2) | row(3 :: 4.25))");
        assert_eq!(format.parse(&text).unwrap(), vec![vec![1.5, -2.0], vec![3.0, 4.25]]);
    }

    #[test]
    fn test_parse_empty_outer_delimiters() {
        let format = custom(
            MatrixFormatOptions::new()
                .with_prefix("")
                .with_suffix("")
                .with_row_separator(";"),
        );
        let mut pos = ParsePosition::new(0);
        let rows = format.parse_at("{1,2};{3,4} tail", &mut pos).unwrap();
        assert_eq!(rows, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        // Whitespace in front of the empty suffix has already been skipped
        assert_eq!(pos.index(), 12);
    }

    #[test]
    fn test_parse_locale_numbers() {
        let format = custom(MatrixFormatOptions::for_locale("de_DE").with_column_separator(";"));
        assert_eq!(
            format.parse("{{1,5; -2,25},{0; 3}}").unwrap(),
            vec![vec![1.5, -2.25], vec![0.0, 3.0]]
        );
    }

    #[test]
    fn test_parse_special_values() {
        let rows = parse_default("{{(NaN),(Infinity)},{(-Infinity),1}}").unwrap();
        assert!(rows[0][0].is_nan());
        assert_eq!(rows[0][1], f64::INFINITY);
        assert_eq!(rows[1][0], f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_preserves_previous_error_on_success() {
        let format = MatrixFormat::default();
        let mut pos = ParsePosition::new(0);
        pos.set_error_index(3);
        assert!(format.parse_at("{{1}}", &mut pos).is_some());
        assert_eq!(pos.error_index(), Some(3));
    }

    #[test]
    fn test_parse_multibyte_offsets() {
        let format = MatrixFormat::default();
        let text = "→ {{1}}";
        let mut pos = ParsePosition::new("→".len());
        assert_eq!(format.parse_at(text, &mut pos), Some(vec![vec![1.0]]));
        assert_eq!(pos.index(), text.len());
    }
}
