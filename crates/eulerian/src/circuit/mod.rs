//! Euler-circuit feasibility and three independent constructors.
//!
//! Purpose
//! - Decide whether a [`Graph`] has an Euler circuit and, if so, build one from
//!   a requested start vertex with any of three algorithms that must agree on
//!   feasibility and each produce a valid closed walk.
//!
//! Algorithms
//! - `HierholzerFast`: two stacks, sub-tours spliced while unwinding.
//! - `HierholzerCompensating`: one stack plus an edge budget; dead ends are
//!   un-walked and the held edge is re-credited after the next forward step.
//! - `FleuryLike`: refuses an edge whose removal disconnects the remaining graph
//!   unless it is the last edge at the current vertex (bridges go last).
//!
//! Every query works on a private clone of the adjacency matrix, so the graph
//! can be shared read-only between any number of concurrent queries.
//!
//! State machine: `check feasibility -> {NoCircuit | Trivial}` or
//! `-> run the walk -> Circuit(vertices)`.

mod compensating;
mod fleury;
mod hierholzer;
mod verify;
mod work;

pub use verify::{verify_circuit, CircuitDefect};

use std::fmt;
use std::str::FromStr;

use crate::connectivity::is_connective;
use crate::graph::{Graph, GraphKind};
use crate::matrix::MatrixError;

/// Circuit construction strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    HierholzerFast,
    HierholzerCompensating,
    FleuryLike,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::HierholzerFast,
        Algorithm::HierholzerCompensating,
        Algorithm::FleuryLike,
    ];
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HierholzerFast => f.write_str("hierholzer-fast"),
            Self::HierholzerCompensating => f.write_str("hierholzer-compensating"),
            Self::FleuryLike => f.write_str("fleury-like"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hierholzer-fast" | "fast" => Ok(Self::HierholzerFast),
            "hierholzer-compensating" | "compensating" => Ok(Self::HierholzerCompensating),
            "fleury-like" | "fleury" => Ok(Self::FleuryLike),
            other => Err(format!("unknown algorithm `{other}`")),
        }
    }
}

/// Outcome of a circuit query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EulerCircuit {
    /// The graph is disconnected or degree-unbalanced.
    NoCircuit,
    /// Single isolated vertex: the empty walk.
    Trivial,
    /// 1-based vertices `[start, ..., start]` of length `edge_count + 1`.
    Circuit(Vec<usize>),
}

impl EulerCircuit {
    pub fn vertices(&self) -> Option<&[usize]> {
        match self {
            Self::Circuit(v) => Some(v),
            _ => None,
        }
    }

    pub fn exists(&self) -> bool {
        !matches!(self, Self::NoCircuit)
    }
}

/// Failures of a circuit query (as opposed to infeasibility, which is `NoCircuit`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CircuitError {
    StartOutOfRange { start: usize, vertices: usize },
    /// The walk found no admissible next edge with `remaining` edges left.
    Stalled {
        algorithm: Algorithm,
        at: usize,
        remaining: u128,
    },
    /// The connectivity oracle rejected the adjacency matrix.
    Connectivity(MatrixError),
}

impl From<MatrixError> for CircuitError {
    fn from(e: MatrixError) -> Self {
        Self::Connectivity(e)
    }
}

impl fmt::Display for CircuitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfRange { start, vertices } => {
                write!(f, "start vertex {start} is not in 1..={vertices}")
            }
            Self::Stalled {
                algorithm,
                at,
                remaining,
            } => write!(
                f,
                "{algorithm} stalled at vertex {at} with {remaining} edges left"
            ),
            Self::Connectivity(e) => write!(f, "connectivity check failed: {e}"),
        }
    }
}

impl std::error::Error for CircuitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Connectivity(e) => Some(e),
            _ => None,
        }
    }
}

/// Degree balance plus connectivity. The trivial graph is feasible.
pub fn has_euler_circuit(graph: &Graph) -> Result<bool, CircuitError> {
    if graph.is_trivial() {
        return Ok(true);
    }
    let n = graph.vertex_count();
    let balanced = match graph.kind() {
        GraphKind::Undirected => (0..n).all(|v| graph.row_total(v) % 2 == 0),
        GraphKind::Directed => (0..n).all(|v| graph.row_total(v) == graph.column_total(v)),
    };
    let feasible = balanced && is_connective(graph.adjacency())?;
    tracing::debug!(
        kind = %graph.kind(),
        vertices = n,
        edges = %graph.edge_count(),
        balanced,
        feasible,
        "euler feasibility"
    );
    Ok(feasible)
}

/// Build an Euler circuit from the 1-based `start` vertex.
pub fn find_euler_circuit(
    graph: &Graph,
    start: usize,
    algorithm: Algorithm,
) -> Result<EulerCircuit, CircuitError> {
    check_start(graph, start)?;
    if !has_euler_circuit(graph)? {
        return Ok(EulerCircuit::NoCircuit);
    }
    construct(graph, start, algorithm)
}

/// One result per start vertex `1..=n`; feasibility is decided once.
pub fn find_circuits_from_every_vertex(
    graph: &Graph,
    algorithm: Algorithm,
) -> Result<Vec<EulerCircuit>, CircuitError> {
    let n = graph.vertex_count();
    if !has_euler_circuit(graph)? {
        return Ok(vec![EulerCircuit::NoCircuit; n]);
    }
    (1..=n).map(|s| construct(graph, s, algorithm)).collect()
}

fn check_start(graph: &Graph, start: usize) -> Result<(), CircuitError> {
    graph
        .check_vertex(start)
        .map_err(|_| CircuitError::StartOutOfRange {
            start,
            vertices: graph.vertex_count(),
        })
}

/// Run `algorithm` on a graph already known to be feasible.
fn construct(
    graph: &Graph,
    start: usize,
    algorithm: Algorithm,
) -> Result<EulerCircuit, CircuitError> {
    if graph.is_trivial() {
        return Ok(EulerCircuit::Trivial);
    }
    let s = start - 1;
    let walk = match algorithm {
        Algorithm::HierholzerFast => hierholzer::circuit(graph, s),
        Algorithm::HierholzerCompensating => compensating::circuit(graph, s)?,
        Algorithm::FleuryLike => fleury::circuit(graph, s)?,
    };
    let vertices: Vec<usize> = walk.into_iter().map(|v| v + 1).collect();
    tracing::debug!(%algorithm, start, len = vertices.len(), "circuit constructed");
    Ok(EulerCircuit::Circuit(vertices))
}
