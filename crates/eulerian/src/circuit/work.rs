//! Private working copy of an adjacency matrix that the walks cut up.
//!
//! Indices here are 0-based. Undirected cuts and links touch `(v, w)` and
//! `(w, v)`, so an undirected self-loop moves the diagonal by 2.

use crate::graph::{Graph, GraphKind};
use crate::matrix::Matrix;

#[derive(Clone, Debug)]
pub(crate) struct WorkMatrix {
    kind: GraphKind,
    m: Matrix<i64>,
}

impl WorkMatrix {
    pub(crate) fn of(graph: &Graph) -> Self {
        Self {
            kind: graph.kind(),
            m: graph.adjacency().clone(),
        }
    }

    /// Undirected view used for connectivity: off-diagonal pairs summed,
    /// diagonal doubled. Undirected inputs are returned as a plain copy.
    pub(crate) fn symmetrized(&self) -> Self {
        if self.kind == GraphKind::Undirected {
            return self.clone();
        }
        let a = self.m.as_dmatrix();
        let sym = nalgebra::DMatrix::from_fn(a.nrows(), a.ncols(), |r, c| {
            if r == c {
                a[(r, r)].saturating_mul(2)
            } else {
                a[(r, c)].saturating_add(a[(c, r)])
            }
        });
        Self {
            kind: GraphKind::Undirected,
            m: Matrix::from(sym),
        }
    }

    #[inline]
    pub(crate) fn matrix(&self) -> &Matrix<i64> {
        &self.m
    }

    /// Lowest-indexed neighbor of `v` with remaining multiplicity.
    pub(crate) fn first_neighbor(&self, v: usize) -> Option<usize> {
        let a = self.m.as_dmatrix();
        (0..a.ncols()).find(|&w| a[(v, w)] > 0)
    }

    /// `v` has no remaining edge.
    pub(crate) fn is_isolated(&self, v: usize) -> bool {
        self.first_neighbor(v).is_none()
    }

    /// All neighbors of `v` with remaining multiplicity, increasing.
    pub(crate) fn neighbors(&self, v: usize) -> Vec<usize> {
        let a = self.m.as_dmatrix();
        (0..a.ncols()).filter(|&w| a[(v, w)] > 0).collect()
    }

    /// Consume one `v -> w` edge.
    pub(crate) fn cut(&mut self, v: usize, w: usize) {
        let kind = self.kind;
        let a = self.m.as_dmatrix_mut();
        a[(v, w)] -= 1;
        if kind == GraphKind::Undirected {
            a[(w, v)] -= 1;
        }
    }

    /// Give one `v -> w` edge back.
    pub(crate) fn link(&mut self, v: usize, w: usize) {
        let kind = self.kind;
        let a = self.m.as_dmatrix_mut();
        a[(v, w)] += 1;
        if kind == GraphKind::Undirected {
            a[(w, v)] += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undirected_cut_is_symmetric_and_loops_move_by_two() {
        let g = Graph::undirected(vec![vec![2, 1], vec![1, 0]]).unwrap();
        let mut w = WorkMatrix::of(&g);
        w.cut(0, 0);
        assert_eq!(w.matrix().get(1, 1).unwrap(), 0);
        w.cut(0, 1);
        assert_eq!(w.matrix().get(2, 1).unwrap(), 0);
        assert!(w.is_isolated(0));
        assert!(w.is_isolated(1));
        w.link(1, 0);
        assert_eq!(w.matrix().get(1, 2).unwrap(), 1);
        // the graph itself is untouched
        assert_eq!(g.adjacency().get(1, 1).unwrap(), 2);
    }

    #[test]
    fn directed_symmetrization() {
        let g = Graph::directed(vec![vec![1, 2, 0], vec![0, 0, 1], vec![1, 0, 0]]).unwrap();
        let s = WorkMatrix::of(&g).symmetrized();
        let expect = Matrix::from_rows(vec![vec![2, 2, 1], vec![2, 0, 1], vec![1, 1, 0]]).unwrap();
        assert_eq!(s.matrix(), &expect);
    }

    #[test]
    fn neighbor_scans_are_increasing() {
        let g = Graph::directed(vec![vec![0, 1, 0, 1], vec![0; 4], vec![0; 4], vec![0; 4]]).unwrap();
        let mut w = WorkMatrix::of(&g);
        assert_eq!(w.first_neighbor(0), Some(1));
        assert_eq!(w.neighbors(0), vec![1, 3]);
        assert_eq!(w.first_neighbor(1), None);
        w.cut(0, 1);
        assert_eq!(w.first_neighbor(0), Some(3));
    }

    #[test]
    fn directed_symmetrization_saturates() {
        let g = Graph::directed(vec![vec![i64::MAX, i64::MAX], vec![1, 0]]).unwrap();
        let s = WorkMatrix::of(&g).symmetrized();
        assert_eq!(s.matrix().get(1, 1).unwrap(), i64::MAX);
        assert_eq!(s.matrix().get(1, 2).unwrap(), i64::MAX);
    }
}
