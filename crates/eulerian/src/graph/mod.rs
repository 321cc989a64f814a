//! Validated adjacency-matrix graphs.
//!
//! A [`Graph`] owns one square, non-negative integer adjacency matrix where
//! entry `(i, j)` is the multiplicity of the edge `i -> j`. Vertices are the
//! dense range `1..=n`; there is no insertion or removal after construction.
//!
//! Kinds
//! - `Directed`: square and non-negative, nothing else.
//! - `Undirected`: additionally symmetric off the diagonal, and every diagonal
//!   entry is even. A self-loop is stored as 2 and contributes 2 to the degree.
//!
//! Construction either returns a graph with every invariant holding or the
//! first violated invariant as a [`GraphError`]. Graphs are immutable; the
//! circuit constructors clone the adjacency matrix before consuming edges.

mod error;
mod types;

pub use error::GraphError;
pub use types::{Graph, GraphKind};

#[cfg(test)]
mod tests;
