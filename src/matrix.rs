//! Matrix storage and the accessor contract used by the formatter.
//!
//! The formatter only reads through [`MatrixAccess`], so any row-major
//! container can be written out. [`Matrix`] is the rectangular type built
//! from parse results; it owns the rectangularity check that the parser
//! deliberately leaves out.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{default_format, Error, Result};

/// Read access to a row-major grid of `f64` values.
pub trait MatrixAccess {
    fn row_count(&self) -> usize;

    fn column_count(&self) -> usize;

    /// Returns the value at `row`, `column`. Callers stay within
    /// [`row_count`](Self::row_count) and [`row_len`](Self::row_len).
    fn entry(&self, row: usize, column: usize) -> f64;

    /// Number of values in `row`. Rectangular matrices keep the default.
    fn row_len(&self, _row: usize) -> usize {
        self.column_count()
    }
}

/// A dense, rectangular matrix with at least one row and one column.
///
/// # Examples
///
/// ```rust
/// use matrix_format::{Matrix, MatrixAccess};
///
/// let m = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
/// assert_eq!(m.row_count(), 2);
/// assert_eq!(m.column_count(), 3);
/// assert_eq!(m.get(1, 2), Some(6.0));
/// assert!(Matrix::from_rows(vec![vec![1.0], vec![2.0, 3.0]]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Matrix {
    rows: usize,
    columns: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Builds a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyMatrix`] when there are no rows or the rows are
    /// empty, and [`Error::RaggedRows`] when rows differ in length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        if columns == 0 {
            return Err(Error::EmptyMatrix);
        }

        let mut data = Vec::with_capacity(rows.len() * columns);
        for (index, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(Error::ragged_rows(index, columns, row.len()));
            }
            data.extend_from_slice(row);
        }

        Ok(Matrix {
            rows: rows.len(),
            columns,
            data,
        })
    }

    /// Builds a matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyMatrix`] for a zero dimension and
    /// [`Error::RaggedRows`] when `data` does not hold `rows * columns` values.
    pub fn from_row_major(rows: usize, columns: usize, data: Vec<f64>) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(Error::EmptyMatrix);
        }
        if rows.checked_mul(columns) != Some(data.len()) {
            let row = data.len() / columns;
            return Err(Error::ragged_rows(row, columns, data.len() % columns));
        }
        Ok(Matrix {
            rows,
            columns,
            data,
        })
    }

    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        if row < self.rows && column < self.columns {
            Some(self.data[row * self.columns + column])
        } else {
            None
        }
    }

    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row < self.rows {
            let start = row * self.columns;
            Some(&self.data[start..start + self.columns])
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.columns)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }
}

/// Formats with the default layout, `{{a,b},{c,d}}`.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&default_format().display(self), f)
    }
}

/// Parses the default layout and requires equal row lengths.
impl FromStr for Matrix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        default_format().parse_matrix(s)
    }
}

impl MatrixAccess for Matrix {
    fn row_count(&self) -> usize {
        self.rows
    }

    fn column_count(&self) -> usize {
        self.columns
    }

    fn entry(&self, row: usize, column: usize) -> f64 {
        self.data[row * self.columns + column]
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Matrix::from_rows(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(matrix: Matrix) -> Self {
        matrix.to_rows()
    }
}

// Row lists may be ragged, e.g. straight out of the parser.
impl MatrixAccess for [Vec<f64>] {
    fn row_count(&self) -> usize {
        self.len()
    }

    fn column_count(&self) -> usize {
        self.first().map_or(0, Vec::len)
    }

    fn entry(&self, row: usize, column: usize) -> f64 {
        self[row][column]
    }

    fn row_len(&self, row: usize) -> usize {
        self[row].len()
    }
}

impl MatrixAccess for Vec<Vec<f64>> {
    fn row_count(&self) -> usize {
        self.as_slice().row_count()
    }

    fn column_count(&self) -> usize {
        self.as_slice().column_count()
    }

    fn entry(&self, row: usize, column: usize) -> f64 {
        self[row][column]
    }

    fn row_len(&self, row: usize) -> usize {
        self[row].len()
    }
}

impl<const R: usize, const C: usize> MatrixAccess for [[f64; C]; R] {
    fn row_count(&self) -> usize {
        R
    }

    fn column_count(&self) -> usize {
        C
    }

    fn entry(&self, row: usize, column: usize) -> f64 {
        self[row][column]
    }
}

impl<M: MatrixAccess + ?Sized> MatrixAccess for &M {
    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn column_count(&self) -> usize {
        (**self).column_count()
    }

    fn entry(&self, row: usize, column: usize) -> f64 {
        (**self).entry(row, column)
    }

    fn row_len(&self, row: usize) -> usize {
        (**self).row_len(row)
    }
}
