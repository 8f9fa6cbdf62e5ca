//! Row-major matrix destination type.

use std::ops::Index;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The flat data length does not match the declared shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("matrix data holds {len} elements, which does not match shape {rows}x{cols}")]
pub struct DimensionError {
    pub rows: usize,
    pub cols: usize,
    pub len: usize,
}

/// A dense two-dimensional matrix stored in flattened row-major form.
///
/// Row `r` occupies elements `[r * cols, (r + 1) * cols)` of the backing
/// storage. The `data.len() == rows * cols` invariant holds for every
/// constructible value, including ones deserialized with serde.
///
/// ## Example
///
/// ```
/// use config_yaml::Matrix;
///
/// let m = Matrix::from_row_major(2, 3, vec![1, 2, 3, 4, 5, 6])?;
/// assert_eq!(m.row(0), Some(&[1, 2, 3][..]));
/// assert_eq!(m[(1, 2)], 6);
/// # Ok::<(), config_yaml::matrix::DimensionError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix<T>")]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Builds a matrix from a flat row-major buffer.
    ///
    /// Fails if `data.len() != rows * cols`; no partially shaped value is
    /// ever produced. A shape whose element count exceeds `usize::MAX` is
    /// rejected the same way rather than wrapping.
    pub fn from_row_major(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, DimensionError> {
        match rows.checked_mul(cols) {
            Some(expected) if expected == data.len() => Ok(Self { rows, cols, data }),
            _ => Err(DimensionError {
                rows,
                cols,
                len: data.len(),
            }),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// The contiguous slice holding row `row`, or `None` when out of bounds.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.rows {
            Some(&self.data[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }

    /// The whole backing storage in row-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consumes the matrix, returning its row-major storage.
    pub fn into_row_major(self) -> Vec<T> {
        self.data
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.get(row, col) {
            Some(element) => element,
            None => panic!(
                "index ({row}, {col}) out of bounds for {}x{} matrix",
                self.rows, self.cols
            ),
        }
    }
}

#[derive(Deserialize)]
struct RawMatrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> TryFrom<RawMatrix<T>> for Matrix<T> {
    type Error = DimensionError;

    fn try_from(raw: RawMatrix<T>) -> Result<Self, DimensionError> {
        Matrix::from_row_major(raw.rows, raw.cols, raw.data)
    }
}
