//! Matrix formatting.
//!
//! Walks a matrix row-major and emits text using the configured (untrimmed)
//! delimiters:
//!
//! ```text
//! PREFIX ROWPREFIX a00 COLSEP a01 ROWSUFFIX ROWSEP ROWPREFIX a10 COLSEP a11 ROWSUFFIX SUFFIX
//! ```
//!
//! Formatting never fails. A matrix without rows becomes the prefix followed
//! directly by the suffix, which the parser in turn rejects as empty.
//!
//! ## Usage
//!
//! ```rust
//! use matrix_format::MatrixFormat;
//!
//! let format = MatrixFormat::default();
//!
//! // Append to an existing buffer
//! let mut out = String::from("m = ");
//! let span = format.format_into(&[[1.0, 0.0], [0.0, 1.0]], &mut out);
//! assert_eq!(out, "m = {{1,0},{0,1}}");
//! assert_eq!(span, 4..17);
//!
//! // Or use it in format strings
//! let m = vec![vec![0.5]];
//! assert_eq!(format!("<{}>", format.display(&m)), "<{{0.5}}>");
//! ```

use std::fmt;
use std::io;
use std::ops::Range;

use crate::{MatrixAccess, MatrixFormat, Result};

impl MatrixFormat {
    /// Formats a matrix into a new string.
    #[must_use]
    pub fn format<M: MatrixAccess + ?Sized>(&self, matrix: &M) -> String {
        // Pre-allocate a few bytes per entry
        let entries = matrix.row_count() * matrix.column_count();
        let mut out = String::with_capacity(self.prefix().len() + self.suffix().len() + entries * 4);
        self.format_into(matrix, &mut out);
        out
    }

    /// Appends the text of a matrix to `out` and returns the byte range written.
    pub fn format_into<M: MatrixAccess + ?Sized>(&self, matrix: &M, out: &mut String) -> Range<usize> {
        let begin = out.len();
        let number_format = self.number_format();

        out.push_str(self.prefix());

        let rows = matrix.row_count();
        for row in 0..rows {
            out.push_str(self.row_prefix());
            for column in 0..matrix.row_len(row) {
                if column > 0 {
                    out.push_str(self.column_separator());
                }
                number_format.format(matrix.entry(row, column), out);
            }
            out.push_str(self.row_suffix());
            if row + 1 < rows {
                out.push_str(self.row_separator());
            }
        }

        out.push_str(self.suffix());
        begin..out.len()
    }

    /// Writes the text of a matrix to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if writing fails.
    pub fn write_to<W, M>(&self, mut writer: W, matrix: &M) -> Result<()>
    where
        W: io::Write,
        M: MatrixAccess + ?Sized,
    {
        writer.write_all(self.format(matrix).as_bytes())?;
        Ok(())
    }

    /// Returns a [`fmt::Display`] adapter that formats `matrix` with `self`.
    #[must_use]
    pub fn display<'a, M: MatrixAccess + ?Sized>(&'a self, matrix: &'a M) -> MatrixDisplay<'a, M> {
        MatrixDisplay {
            format: self,
            matrix,
        }
    }
}

/// Display adapter created by [`MatrixFormat::display`].
pub struct MatrixDisplay<'a, M: ?Sized> {
    format: &'a MatrixFormat,
    matrix: &'a M,
}

impl<M: MatrixAccess + ?Sized> fmt::Display for MatrixDisplay<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format.format(self.matrix))
    }
}
