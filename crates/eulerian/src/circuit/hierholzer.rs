//! Hierholzer's algorithm, two-stack formulation.
//!
//! `path` holds vertices whose sub-tour is still open; `closed` receives
//! vertices once they run out of edges. Popping splices each finished sub-tour
//! into its parent, so `closed` read top to bottom is the circuit.
//! Cost is one neighbor scan per consumed edge: O(n * E) on a dense matrix.

use crate::graph::Graph;

use super::work::WorkMatrix;

/// 0-based circuit from `start`. The graph must be feasible and non-trivial.
pub(crate) fn circuit(graph: &Graph, start: usize) -> Vec<usize> {
    let mut work = WorkMatrix::of(graph);
    let mut path = vec![start];
    let mut closed = Vec::new();
    let mut current = start;
    while !path.is_empty() {
        match work.first_neighbor(current) {
            Some(next) => {
                path.push(current);
                work.cut(current, next);
                current = next;
            }
            None => {
                closed.push(current);
                if let Some(v) = path.pop() {
                    current = v;
                }
            }
        }
    }
    closed.reverse();
    closed
}
