//! Independent check that a vertex sequence is an Euler circuit of a graph.

use std::fmt;

use crate::graph::{Graph, GraphKind};

/// First way a candidate walk fails to be an Euler circuit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CircuitDefect {
    WrongLength { expected: u128, found: usize },
    NotClosed { first: usize, last: usize },
    VertexOutOfRange { step: usize, vertex: usize },
    /// Step `step` (0-based) uses `from -> to` more often than the graph has it.
    EdgeOverused { step: usize, from: usize, to: usize },
}

impl fmt::Display for CircuitDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength { expected, found } => {
                write!(f, "walk has {found} vertices, expected {expected}")
            }
            Self::NotClosed { first, last } => {
                write!(f, "walk starts at {first} but ends at {last}")
            }
            Self::VertexOutOfRange { step, vertex } => {
                write!(f, "vertex {vertex} at position {step} is not in the graph")
            }
            Self::EdgeOverused { step, from, to } => {
                write!(f, "step {step} uses edge {from} -> {to} beyond its multiplicity")
            }
        }
    }
}

impl std::error::Error for CircuitDefect {}

/// Accepts exactly the closed walks over 1-based vertices that consume every
/// edge multiplicity once. Length `E + 1` plus no overuse implies exact use.
pub fn verify_circuit(graph: &Graph, vertices: &[usize]) -> Result<(), CircuitDefect> {
    let expected = graph.edge_count() + 1;
    if vertices.len() as u128 != expected {
        return Err(CircuitDefect::WrongLength {
            expected,
            found: vertices.len(),
        });
    }
    let n = graph.vertex_count();
    if let Some((step, &vertex)) = vertices
        .iter()
        .enumerate()
        .find(|(_, &v)| v == 0 || v > n)
    {
        return Err(CircuitDefect::VertexOutOfRange { step, vertex });
    }
    let (first, last) = (vertices[0], vertices[vertices.len() - 1]);
    if first != last {
        return Err(CircuitDefect::NotClosed { first, last });
    }
    let mut left = graph.adjacency().as_dmatrix().clone();
    let undirected = graph.kind() == GraphKind::Undirected;
    for (step, pair) in vertices.windows(2).enumerate() {
        let (from, to) = (pair[0] - 1, pair[1] - 1);
        let need = if undirected && from == to { 2 } else { 1 };
        if left[(from, to)] < need {
            return Err(CircuitDefect::EdgeOverused {
                step,
                from: pair[0],
                to: pair[1],
            });
        }
        left[(from, to)] -= 1;
        if undirected {
            left[(to, from)] -= 1;
        }
    }
    Ok(())
}
