//! Choosing a graph kind for a bare adjacency matrix.
//!
//! A matrix alone does not say whether it is directed. Rules, first match wins:
//! - not symmetric: directed (an undirected matrix must be symmetric);
//! - symmetric with an odd diagonal entry: directed (undirected loops count twice);
//! - anything else is ambiguous and read as undirected.
//!
//! An explicit `--kind` skips the rules; the library still validates the result.

use clap::ValueEnum;
use eulerian::graph::GraphKind;
use eulerian::matrix::Matrix;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Auto,
    Directed,
    Undirected,
}

pub fn classify(m: &Matrix<i64>, requested: KindArg) -> GraphKind {
    match requested {
        KindArg::Directed => GraphKind::Directed,
        KindArg::Undirected => GraphKind::Undirected,
        KindArg::Auto => {
            let odd_loop = m.is_square()
                && m.as_dmatrix().diagonal().iter().any(|x| x % 2 != 0);
            if !m.is_symmetric() || odd_loop {
                GraphKind::Directed
            } else {
                GraphKind::Undirected
            }
        }
    }
}
