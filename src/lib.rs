//! # matrix_format
//!
//! A text codec for numeric matrices with configurable delimiters and
//! locale-aware numbers.
//!
//! ## What does it do?
//!
//! A matrix is written as a prefix, one row prefix/suffix pair per row, row
//! and column separators between rows and entries, and a closing suffix. The
//! default layout is the brace notation `{{a,b},{c,d}}`:
//!
//! ```text
//! PREFIX ROWPREFIX a00 COLSEP a01 ROWSUFFIX ROWSEP ROWPREFIX a10 COLSEP a11 ROWSUFFIX SUFFIX
//! ```
//!
//! Parsing accepts exactly what formatting produces, plus arbitrary
//! whitespace around every token. It can also start in the middle of a larger
//! text and report where the matrix ended.
//!
//! ## Key Features
//!
//! - **Configurable**: six delimiter strings, validated once at construction
//! - **Locale-aware**: decimal separator and minus sign from an embedded locale table
//! - **Embeddable**: [`MatrixFormat::parse_at`] reads a matrix out of surrounding text
//! - **All-or-nothing**: failed parses leave the cursor untouched and record the error offset
//! - **Serde support**: store a [`Matrix`] field as text with [`text`]
//!
//! ## Quick Start
//!
//! ```rust
//! use matrix_format::{from_str, to_string};
//!
//! let m = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
//! let text = to_string(&m);
//! assert_eq!(text, "{{1,2,3},{4,5,6}}");
//!
//! let rows = from_str(" { {1 , 2 , 3} , {4,5,6} } ").unwrap();
//! assert_eq!(rows, vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
//! ```
//!
//! ### Custom Delimiters
//!
//! ```rust
//! use matrix_format::{MatrixFormat, MatrixFormatOptions};
//!
//! let format = MatrixFormat::new(
//!     MatrixFormatOptions::new()
//!         .with_prefix("[")
//!         .with_suffix("]")
//!         .with_row_separator(";")
//!         .with_column_separator(", "),
//! )
//! .unwrap();
//!
//! assert_eq!(format.format(&[[1.0, 2.0], [3.0, 4.0]]), "[{1, 2};{3, 4}]");
//! assert_eq!(
//!     format.parse("[{1, 2}; {3, 4}]").unwrap(),
//!     vec![vec![1.0, 2.0], vec![3.0, 4.0]]
//! );
//! ```
//!
//! ### Locales
//!
//! Locales whose decimal separator is `,` need a different column separator,
//! otherwise `1,5` would be ambiguous:
//!
//! ```rust
//! use matrix_format::{MatrixFormat, MatrixFormatOptions};
//!
//! assert!(MatrixFormat::for_locale("de_DE").is_err());
//!
//! let format = MatrixFormat::new(
//!     MatrixFormatOptions::for_locale("de_DE").with_column_separator("; "),
//! )
//! .unwrap();
//! assert_eq!(format.format(&[[1.5, -2.0]]), "{{1,5; -2}}");
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber:
//! `debug` when a format is built or the locale table is loaded, `trace` for
//! every rejected parse.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - formatting and parsing with the default layout
//! - **`custom_delimiters.rs`** - bracket layouts and locale presets
//! - **`embedded_parse.rs`** - reading matrices out of a larger text
//!
//! Run any example with: `cargo run --example <name>`

pub mod de;
pub mod error;
pub mod format;
pub mod locale;
pub mod matrix;
pub mod number;
pub mod options;
pub mod position;
pub mod ser;
pub mod text;

pub use error::{Error, Result};
pub use format::MatrixFormat;
pub use locale::{available_locales, LocaleSymbols, DEFAULT_LOCALE};
pub use matrix::{Matrix, MatrixAccess};
pub use number::NumberFormat;
pub use options::{Delimiter, MatrixFormatOptions};
pub use position::ParsePosition;
pub use ser::MatrixDisplay;

use std::io;
use std::sync::OnceLock;

/// The shared default layout used by the free functions.
pub(crate) fn default_format() -> &'static MatrixFormat {
    static DEFAULT: OnceLock<MatrixFormat> = OnceLock::new();
    DEFAULT.get_or_init(MatrixFormat::default)
}

/// Formats a matrix with the default layout.
///
/// # Examples
///
/// ```rust
/// use matrix_format::to_string;
///
/// assert_eq!(to_string(&vec![vec![0.5, -1.0]]), "{{0.5,-1}}");
/// ```
#[must_use]
pub fn to_string<M>(matrix: &M) -> String
where
    M: MatrixAccess + ?Sized,
{
    default_format().format(matrix)
}

/// Formats a matrix with a layout built from `options`.
///
/// # Errors
///
/// Returns an error if the options do not describe a valid layout.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<M>(matrix: &M, options: MatrixFormatOptions) -> Result<String>
where
    M: MatrixAccess + ?Sized,
{
    Ok(MatrixFormat::new(options)?.format(matrix))
}

/// Writes a matrix in the default layout.
///
/// # Examples
///
/// ```rust
/// use matrix_format::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &[[1.0], [2.0]]).unwrap();
/// assert_eq!(buffer, b"{{1},{2}}");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, M>(writer: W, matrix: &M) -> Result<()>
where
    W: io::Write,
    M: MatrixAccess + ?Sized,
{
    default_format().write_to(writer, matrix)
}

/// Parses a matrix at the start of `s` in the default layout.
///
/// Text after the closing suffix is ignored. Rows may differ in length; use
/// [`Matrix::from_rows`] or [`MatrixFormat::parse_matrix`] to require a
/// rectangular result.
///
/// # Errors
///
/// Returns [`Error::MatrixParse`] with the offset where parsing diverged.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Vec<Vec<f64>>> {
    default_format().parse(s)
}

/// Parses `s` with a layout built from `options`.
///
/// # Errors
///
/// Returns an error if the options are invalid or `s` is not a matrix.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_options(s: &str, options: MatrixFormatOptions) -> Result<Vec<Vec<f64>>> {
    MatrixFormat::new(options)?.parse(s)
}

/// Reads all of `reader` and parses it as a matrix in the default layout.
///
/// # Examples
///
/// ```rust
/// use matrix_format::from_reader;
/// use std::io::Cursor;
///
/// let rows = from_reader(Cursor::new(b"{{1,2},{3,4}}\n")).unwrap();
/// assert_eq!(rows, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails and [`Error::MatrixParse`] if the
/// text is not a matrix.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R>(mut reader: R) -> Result<Vec<Vec<f64>>>
where
    R: io::Read,
{
    let mut string = String::new();
    reader.read_to_string(&mut string)?;
    from_str(&string)
}

/// Parses UTF-8 bytes as a matrix in the default layout.
///
/// # Errors
///
/// Returns [`Error::MatrixParse`] at the first invalid byte if `v` is not
/// UTF-8, or wherever the text stops being a matrix.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Vec<Vec<f64>>> {
    let s = std::str::from_utf8(v).map_err(|e| {
        Error::matrix_parse(&String::from_utf8_lossy(v), e.valid_up_to())
    })?;
    from_str(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_to_string_from_str() {
        let m = Matrix::from_rows(vec![vec![1.0, -2.5], vec![0.125, 4.0]]).unwrap();
        let text = to_string(&m);
        assert_eq!(text, "{{1,-2.5},{0.125,4}}");
        assert_eq!(from_str(&text).unwrap(), m.to_rows());
    }

    #[test]
    fn test_from_str_error_offset() {
        let err = from_str("{{1,2,x}}").unwrap_err();
        assert_eq!(err, Error::matrix_parse("{{1,2,x}}", 6));
        assert_eq!(err.index(), Some(6));
    }

    #[test]
    fn test_from_str_ignores_trailing_text() {
        assert_eq!(from_str("{{1}} extra").unwrap(), vec![vec![1.0]]);
        assert!(from_str("extra {{1}}").is_err());
    }

    #[test]
    fn test_with_options() {
        let options = MatrixFormatOptions::new()
            .with_prefix("[")
            .with_suffix("]")
            .with_row_prefix("")
            .with_row_suffix("")
            .with_row_separator(";")
            .with_column_separator(" ");

        // A blank column separator cannot be matched
        assert!(to_string_with_options(&[[1.0]], options.clone()).is_err());

        let options = options.with_column_separator(",");
        let text = to_string_with_options(&[[1.0, 2.0], [3.0, 4.0]], options.clone()).unwrap();
        assert_eq!(text, "[1,2;3,4]");
        assert_eq!(
            from_str_with_options(&text, options).unwrap(),
            vec![vec![1.0, 2.0], vec![3.0, 4.0]]
        );
    }

    #[test]
    fn test_to_writer() {
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &vec![vec![3.0, 4.0]]).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "{{3,4}}");
    }

    #[test]
    fn test_from_reader() {
        let rows = from_reader(Cursor::new("  {{5},{6}}  ")).unwrap();
        assert_eq!(rows, vec![vec![5.0], vec![6.0]]);
    }

    #[test]
    fn test_from_slice() {
        assert_eq!(from_slice(b"{{1,2}}").unwrap(), vec![vec![1.0, 2.0]]);

        let err = from_slice(b"{{1,\xff}}").unwrap_err();
        assert_eq!(err.index(), Some(4));
    }

    #[test]
    fn test_default_format_is_shared() {
        assert!(std::ptr::eq(default_format(), default_format()));
        assert_eq!(default_format(), &MatrixFormat::default());
    }
}
