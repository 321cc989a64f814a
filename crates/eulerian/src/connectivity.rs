//! Reachability tests by matrix power summation.
//!
//! For an `n`-vertex graph with adjacency `M`, any two mutually reachable
//! vertices are joined by a walk of length at most `n - 1`, so
//! `S = M^0 + M^1 + ... + M^(n-1)` has a zero at `(i, j)` exactly when `j`
//! cannot be reached from `i`. The graph is connective iff `S` has no zero.
//!
//! Sums run over the 0/1 support of `M` in `f64`: multiplicities and self-loops
//! only add positive mass, and walk counts would overflow integer storage
//! long before the O(n^3 log n) cost becomes the limit.

use std::collections::BTreeSet;

use num_traits::AsPrimitive;

use crate::matrix::{Element, Matrix, MatrixError};

/// True iff every vertex reaches every vertex.
pub fn is_connective<T: Element>(m: &Matrix<T>) -> Result<bool, MatrixError> {
    if m.is_empty() {
        return Err(MatrixError::EmptyMatrix);
    }
    if !m.is_square() {
        return Err(MatrixError::NotSquare {
            rows: m.rows(),
            cols: m.cols(),
        });
    }
    let n = m.rows();
    let support: Matrix<f64> = Matrix::from(m.as_dmatrix().map(|x| {
        if <T as AsPrimitive<f64>>::as_(x) > 0.0 {
            1.0
        } else {
            0.0
        }
    }));
    let mut closure = Matrix::<f64>::zeros(n, n);
    for k in 0..n {
        closure = closure.add(&support.pow(k)?)?;
    }
    Ok(!closure.has_zero())
}

/// Connectivity of the subgraph induced by every vertex not in `ignored` (1-based).
///
/// Ignored vertices are deleted together with their row and column; the
/// remaining vertices keep their relative order. With nothing ignored this is
/// [`is_connective`]. Ignoring every vertex leaves nothing to disconnect.
pub fn is_partial_connective<T: Element>(
    m: &Matrix<T>,
    ignored: &BTreeSet<usize>,
) -> Result<bool, MatrixError> {
    if ignored.is_empty() {
        return is_connective(m);
    }
    if !m.is_square() {
        return Err(MatrixError::NotSquare {
            rows: m.rows(),
            cols: m.cols(),
        });
    }
    let keep: Vec<usize> = (0..m.rows())
        .filter(|v| !ignored.contains(&(v + 1)))
        .collect();
    if keep.is_empty() {
        return Ok(true);
    }
    let full = m.as_dmatrix();
    let induced = nalgebra::DMatrix::from_fn(keep.len(), keep.len(), |r, c| {
        full[(keep[r], keep[c])]
    });
    is_connective(&Matrix::from(induced))
}
