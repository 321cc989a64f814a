//! Dense rectangular matrices with 1-based access.
//!
//! Purpose
//! - Provide the small algebra the graph code needs: elementwise `add`/`sub`,
//!   products, binary-exponentiation powers, transpose and row/column sums.
//! - Every shape-dependent operation is fallible and reports a named
//!   [`MatrixError`] instead of panicking, so callers can tell causes apart.
//!
//! Storage
//! - Backed by `nalgebra::DMatrix<T>`; shape is fixed at construction, element
//!   values stay mutable. `Clone` is a deep copy. `Default` is the 0x0 empty
//!   matrix, so `std::mem::take` moves a matrix out and leaves the source empty.
//! - Coordinates are 1-based at this API boundary (`(1, 1)` is the top-left
//!   element). Crate-internal hot loops use the 0-based `nalgebra` view.

mod element;
mod error;
mod ops;

pub use element::Element;
pub use error::MatrixError;

use nalgebra::DMatrix;

/// Rectangular table of numeric elements.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T: Element> {
    data: DMatrix<T>,
}

impl<T: Element> Default for Matrix<T> {
    fn default() -> Self {
        Self {
            data: DMatrix::from_vec(0, 0, Vec::new()),
        }
    }
}

impl<T: Element> From<DMatrix<T>> for Matrix<T> {
    fn from(data: DMatrix<T>) -> Self {
        Self { data }
    }
}

impl<T: Element> Matrix<T> {
    /// Literal initialization from a list of rows. All rows must share the first row's length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        if n_rows == 0 || n_cols == 0 {
            return Err(MatrixError::EmptyMatrix);
        }
        let mut flat = Vec::with_capacity(n_rows * n_cols);
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != n_cols {
                return Err(MatrixError::RaggedRows {
                    row: idx + 1,
                    expected: n_cols,
                    found: row.len(),
                });
            }
            flat.extend(row);
        }
        Ok(Self {
            data: DMatrix::from_row_slice(n_rows, n_cols, &flat),
        })
    }

    /// Initialization from a row-major buffer.
    pub fn from_row_slice(rows: usize, cols: usize, data: &[T]) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::EmptyMatrix);
        }
        if data.len() != rows * cols {
            return Err(MatrixError::LengthMismatch {
                expected: rows * cols,
                found: data.len(),
            });
        }
        Ok(Self {
            data: DMatrix::from_row_slice(rows, cols, data),
        })
    }

    /// All-zero matrix of the given shape.
    ///
    /// A zero dimension yields an empty matrix. Element access, [`Matrix::pow`]
    /// and the connectivity oracle reject it with [`MatrixError::EmptyMatrix`].
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: DMatrix::from_element(rows, cols, T::zero()),
        }
    }

    /// `n x n` identity. `identity(0)` is empty, as with [`Matrix::zeros`].
    pub fn identity(n: usize) -> Self {
        Self {
            data: DMatrix::from_fn(n, n, |r, c| if r == c { T::one() } else { T::zero() }),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.data.shape()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.cols() == 0
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    /// Element at 1-based `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        let (r, c) = self.locate(row, col)?;
        Ok(self.data[(r, c)])
    }

    /// Mutable element at 1-based `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        let (r, c) = self.locate(row, col)?;
        Ok(&mut self.data[(r, c)])
    }

    /// Overwrite the element at 1-based `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        *self.get_mut(row, col)? = value;
        Ok(())
    }

    /// Symmetric with respect to the main diagonal. Non-square matrices are never symmetric.
    pub fn is_symmetric(&self) -> bool {
        let n = self.rows();
        if !self.is_square() {
            return false;
        }
        (0..n).all(|r| (r + 1..n).all(|c| self.data[(r, c)] == self.data[(c, r)]))
    }

    /// True if any element equals zero.
    pub fn has_zero(&self) -> bool {
        self.data.iter().any(|x| *x == T::zero())
    }

    /// Borrow the underlying 0-based storage.
    #[inline]
    pub fn as_dmatrix(&self) -> &DMatrix<T> {
        &self.data
    }

    #[inline]
    pub(crate) fn as_dmatrix_mut(&mut self) -> &mut DMatrix<T> {
        &mut self.data
    }

    #[inline]
    pub fn into_dmatrix(self) -> DMatrix<T> {
        self.data
    }

    /// Map 1-based coordinates to 0-based storage indices.
    fn locate(&self, row: usize, col: usize) -> Result<(usize, usize), MatrixError> {
        if self.is_empty() {
            return Err(MatrixError::EmptyMatrix);
        }
        let (rows, cols) = self.shape();
        if row == 0 || col == 0 || row > rows || col > cols {
            return Err(MatrixError::IndexOutOfRange {
                row,
                col,
                rows,
                cols,
            });
        }
        Ok((row - 1, col - 1))
    }
}
