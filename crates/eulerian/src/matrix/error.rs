use std::fmt;

/// Failure conditions raised by the matrix engine.
///
/// Coordinates are 1-based, matching the public accessors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatrixError {
    /// The matrix has no rows or no columns.
    EmptyMatrix,
    /// Literal initialization with rows of unequal length.
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// Flat initialization whose buffer does not match `rows * cols`.
    LengthMismatch { expected: usize, found: usize },
    /// `(row, col)` lies outside `[1, rows] x [1, cols]`.
    IndexOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// Elementwise operation on matrices of different shapes.
    NotAddable {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// Product where the left column count differs from the right row count.
    NotMultipliable {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// Operation that needs a square matrix.
    NotSquare { rows: usize, cols: usize },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMatrix => write!(f, "matrix is empty"),
            Self::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} elements, expected {expected} like the first row"
            ),
            Self::LengthMismatch { expected, found } => {
                write!(f, "element buffer has length {found}, expected {expected}")
            }
            Self::IndexOutOfRange {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "index ({row}, {col}) is out of range for a {rows}x{cols} matrix"
            ),
            Self::NotAddable { lhs, rhs } => write!(
                f,
                "matrices are not addable: {}x{} vs {}x{}",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            Self::NotMultipliable { lhs, rhs } => write!(
                f,
                "matrices are not multipliable: {}x{} times {}x{}",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            Self::NotSquare { rows, cols } => write!(f, "matrix is not square ({rows}x{cols})"),
        }
    }
}

impl std::error::Error for MatrixError {}
