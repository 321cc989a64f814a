//! Fleury-style walk: never burn a bridge while another edge is available.
//!
//! Connectivity is judged on an undirected view of the remaining edges (the
//! working matrix itself for undirected graphs, its symmetrization for
//! directed ones). Vertices the walk has left for the last time are excluded
//! from the test, since their isolation is final. Each decision runs a full
//! power-sum connectivity check, so this is the slowest constructor by far.

use std::collections::BTreeSet;

use crate::connectivity::is_partial_connective;
use crate::graph::Graph;

use super::work::WorkMatrix;
use super::{Algorithm, CircuitError};

/// 0-based circuit from `start`. The graph must be feasible and non-trivial.
pub(crate) fn circuit(graph: &Graph, start: usize) -> Result<Vec<usize>, CircuitError> {
    let mut work = WorkMatrix::of(graph);
    let mut view = work.symmetrized();
    // 1-based, as the oracle expects
    let mut ignored: BTreeSet<usize> = BTreeSet::new();
    let mut remaining = graph.edge_count();
    let mut path: Vec<usize> = Vec::new();
    let mut current = start;

    while remaining > 0 {
        let mut accepted = None;
        for next in work.neighbors(current) {
            work.cut(current, next);
            view.cut(current, next);
            if view.is_isolated(current) {
                ignored.insert(current + 1);
                accepted = Some(next);
                break;
            }
            if is_partial_connective(view.matrix(), &ignored)? {
                accepted = Some(next);
                break;
            }
            tracing::trace!(from = current + 1, to = next + 1, "bridge deferred");
            work.link(current, next);
            view.link(current, next);
        }
        let Some(next) = accepted else {
            tracing::warn!(at = current + 1, remaining = %remaining, "no admissible edge");
            return Err(CircuitError::Stalled {
                algorithm: Algorithm::FleuryLike,
                at: current + 1,
                remaining,
            });
        };
        path.push(current);
        remaining -= 1;
        current = next;
    }
    path.push(start);
    Ok(path)
}
