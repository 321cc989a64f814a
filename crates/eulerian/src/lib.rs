//! Euler circuits on multigraphs given as adjacency matrices.
//!
//! Layers, bottom-up
//! - [`matrix`]: dense matrices with 1-based access and fallible, named errors.
//! - [`connectivity`]: "every vertex reaches every vertex" via summed matrix powers.
//! - [`graph`]: validated directed/undirected multigraphs and their degrees.
//! - [`circuit`]: feasibility plus three circuit constructors.
//! - [`sample`]: reproducible random Eulerian graphs for tests and benches.
//!
//! Vertices are 1-based everywhere in the public API. A [`graph::Graph`] is
//! immutable after construction; every query works on a private copy.

pub mod circuit;
pub mod connectivity;
pub mod graph;
pub mod matrix;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::circuit::{
        find_circuits_from_every_vertex, find_euler_circuit, has_euler_circuit, verify_circuit,
        Algorithm, CircuitDefect, CircuitError, EulerCircuit,
    };
    pub use crate::connectivity::{is_connective, is_partial_connective};
    pub use crate::graph::{Graph, GraphError, GraphKind};
    pub use crate::matrix::{Element, Matrix, MatrixError};
    pub use crate::sample::{draw_eulerian, EulerianCfg, ReplayToken};
}
