use std::fmt;

use crate::matrix::MatrixError;

/// Reasons a matrix is rejected as a graph, or a graph query is malformed.
///
/// Coordinates and vertices are 1-based and name the first violation in
/// row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// The input could not be built as a matrix at all (empty, ragged).
    Matrix(MatrixError),
    NotSquare { rows: usize, cols: usize },
    NegativeEntry { row: usize, col: usize, value: i64 },
    /// Undirected only: `(row, col) != (col, row)`.
    NotSymmetric { row: usize, col: usize },
    /// Undirected only: a diagonal entry is odd.
    OddSelfLoop { vertex: usize, count: i64 },
    VertexOutOfRange { vertex: usize, vertices: usize },
}

impl From<MatrixError> for GraphError {
    fn from(e: MatrixError) -> Self {
        Self::Matrix(e)
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Matrix(e) => write!(f, "invalid adjacency matrix: {e}"),
            Self::NotSquare { rows, cols } => {
                write!(f, "adjacency matrix is not square ({rows}x{cols})")
            }
            Self::NegativeEntry { row, col, value } => {
                write!(f, "negative edge multiplicity {value} at ({row}, {col})")
            }
            Self::NotSymmetric { row, col } => write!(
                f,
                "undirected adjacency is not symmetric: ({row}, {col}) != ({col}, {row})"
            ),
            Self::OddSelfLoop { vertex, count } => write!(
                f,
                "undirected self-loop entry at vertex {vertex} is odd ({count})"
            ),
            Self::VertexOutOfRange { vertex, vertices } => {
                write!(f, "vertex {vertex} is not in 1..={vertices}")
            }
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Matrix(e) => Some(e),
            _ => None,
        }
    }
}
