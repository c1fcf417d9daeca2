//! Error types for matrix formatting and parsing.
//!
//! Parsing has exactly one failure kind, [`Error::MatrixParse`], carrying the
//! offending text and the offset at which parsing diverged. The remaining
//! variants belong to the edges of the crate:
//!
//! - **Configuration**: delimiter sets that cannot be parsed back unambiguously
//! - **Locales**: identifiers missing from the embedded locale table
//! - **Matrix construction**: empty or ragged row sets
//! - **I/O**: writer failures while emitting text
//!
//! ## Examples
//!
//! ```rust
//! use matrix_format::{from_str, Error};
//!
//! let result = from_str("{{1,2,x}}");
//!
//! if let Err(Error::MatrixParse { index, .. }) = result {
//!     assert_eq!(index, 6);
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The text does not start with a well-formed matrix
    #[error("Unparseable matrix at offset {index}: \"{source_text}\"")]
    MatrixParse { source_text: String, index: usize },

    /// The delimiter configuration cannot round-trip
    #[error("Invalid matrix format configuration: {0}")]
    InvalidConfig(String),

    /// The locale identifier is not in the locale table
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// A matrix needs at least one row and one column
    #[error("Matrix must have at least one row and one column")]
    EmptyMatrix,

    /// Rows of unequal length were given to a rectangular matrix
    #[error("Ragged matrix: row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// IO error while reading or writing matrix text
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates the parse failure reported by the throwing entry points.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use matrix_format::Error;
    ///
    /// let err = Error::matrix_parse("{{1,", 4);
    /// assert!(err.to_string().contains("offset 4"));
    /// ```
    pub fn matrix_parse(source: &str, index: usize) -> Self {
        Error::MatrixParse {
            source_text: source.to_string(),
            index,
        }
    }

    /// Creates a configuration error.
    pub fn invalid_config<T: fmt::Display>(msg: T) -> Self {
        Error::InvalidConfig(msg.to_string())
    }

    /// Creates an unknown locale error.
    pub fn unknown_locale(locale: &str) -> Self {
        Error::UnknownLocale(locale.to_string())
    }

    /// Creates a ragged rows error.
    pub fn ragged_rows(row: usize, expected: usize, found: usize) -> Self {
        Error::RaggedRows {
            row,
            expected,
            found,
        }
    }

    /// Creates an I/O error for reader or writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the error offset for parse failures.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            Error::MatrixParse { index, .. } => Some(*index),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
