use std::fmt;
use std::str::FromStr;

use crate::matrix::{Matrix, MatrixError};

use super::GraphError;

/// Directed or undirected interpretation of an adjacency matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GraphKind {
    Directed,
    Undirected,
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directed => f.write_str("directed"),
            Self::Undirected => f.write_str("undirected"),
        }
    }
}

impl FromStr for GraphKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "directed" => Ok(Self::Directed),
            "undirected" => Ok(Self::Undirected),
            other => Err(format!("unknown graph kind `{other}`")),
        }
    }
}

/// Multigraph on vertices `1..=n` backed by its adjacency matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Graph {
    kind: GraphKind,
    adjacency: Matrix<i64>,
}

impl Graph {
    /// Validate `adjacency` against the invariants of `kind`.
    pub fn new(adjacency: Matrix<i64>, kind: GraphKind) -> Result<Self, GraphError> {
        validate(&adjacency, kind)?;
        Ok(Self { kind, adjacency })
    }

    /// Literal rows, then [`Graph::new`].
    pub fn from_rows(rows: Vec<Vec<i64>>, kind: GraphKind) -> Result<Self, GraphError> {
        Self::new(Matrix::from_rows(rows)?, kind)
    }

    pub fn directed(rows: Vec<Vec<i64>>) -> Result<Self, GraphError> {
        Self::from_rows(rows, GraphKind::Directed)
    }

    pub fn undirected(rows: Vec<Vec<i64>>) -> Result<Self, GraphError> {
        Self::from_rows(rows, GraphKind::Undirected)
    }

    /// Single isolated vertex.
    pub fn trivial() -> Self {
        Self {
            kind: GraphKind::Undirected,
            adjacency: Matrix::zeros(1, 1),
        }
    }

    /// `n` isolated vertices.
    pub fn empty(n: usize, kind: GraphKind) -> Result<Self, GraphError> {
        if n == 0 {
            return Err(GraphError::Matrix(MatrixError::EmptyMatrix));
        }
        Ok(Self {
            kind,
            adjacency: Matrix::zeros(n, n),
        })
    }

    #[inline]
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    #[inline]
    pub fn adjacency(&self) -> &Matrix<i64> {
        &self.adjacency
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.rows()
    }

    /// Number of edges counted with multiplicity; an undirected self-loop counts once.
    ///
    /// Counts are `u128`: `n * n` entries of up to `i64::MAX` always fit.
    pub fn edge_count(&self) -> u128 {
        let total: u128 = widen(self.adjacency.as_dmatrix().iter());
        match self.kind {
            GraphKind::Directed => total,
            GraphKind::Undirected => total / 2,
        }
    }

    /// Undirected: row sum (self-loops count 2). Directed: out-degree plus in-degree.
    pub fn degree(&self, v: usize) -> Result<u128, GraphError> {
        match self.kind {
            GraphKind::Undirected => self.out_degree(v),
            GraphKind::Directed => Ok(self.out_degree(v)? + self.in_degree(v)?),
        }
    }

    /// Row sum of `v`.
    pub fn out_degree(&self, v: usize) -> Result<u128, GraphError> {
        self.check_vertex(v)?;
        Ok(self.row_total(v - 1))
    }

    /// Column sum of `v`.
    pub fn in_degree(&self, v: usize) -> Result<u128, GraphError> {
        self.check_vertex(v)?;
        Ok(self.column_total(v - 1))
    }

    /// Out-degree of the 0-based vertex `r`.
    pub(crate) fn row_total(&self, r: usize) -> u128 {
        widen(self.adjacency.as_dmatrix().row(r).iter())
    }

    /// In-degree of the 0-based vertex `c`.
    pub(crate) fn column_total(&self, c: usize) -> u128 {
        widen(self.adjacency.as_dmatrix().column(c).iter())
    }

    /// Exactly one vertex and no edges.
    pub fn is_trivial(&self) -> bool {
        self.vertex_count() == 1 && self.edge_count() == 0
    }

    pub(crate) fn check_vertex(&self, v: usize) -> Result<(), GraphError> {
        if v == 0 || v > self.vertex_count() {
            return Err(GraphError::VertexOutOfRange {
                vertex: v,
                vertices: self.vertex_count(),
            });
        }
        Ok(())
    }
}

/// Sum non-negative entries without overflowing `i64`.
fn widen<'a>(entries: impl Iterator<Item = &'a i64>) -> u128 {
    entries.map(|&x| u128::from(x.unsigned_abs())).sum()
}

fn validate(m: &Matrix<i64>, kind: GraphKind) -> Result<(), GraphError> {
    if m.is_empty() {
        return Err(GraphError::Matrix(MatrixError::EmptyMatrix));
    }
    if !m.is_square() {
        return Err(GraphError::NotSquare {
            rows: m.rows(),
            cols: m.cols(),
        });
    }
    let a = m.as_dmatrix();
    let n = m.rows();
    for r in 0..n {
        for c in 0..n {
            if a[(r, c)] < 0 {
                return Err(GraphError::NegativeEntry {
                    row: r + 1,
                    col: c + 1,
                    value: a[(r, c)],
                });
            }
        }
    }
    if kind == GraphKind::Directed {
        return Ok(());
    }
    for r in 0..n {
        for c in r + 1..n {
            if a[(r, c)] != a[(c, r)] {
                return Err(GraphError::NotSymmetric {
                    row: r + 1,
                    col: c + 1,
                });
            }
        }
    }
    for v in 0..n {
        if a[(v, v)] % 2 != 0 {
            return Err(GraphError::OddSelfLoop {
                vertex: v + 1,
                count: a[(v, v)],
            });
        }
    }
    Ok(())
}
