//! Hierholzer variant with a single walk stack and an edge budget.
//!
//! The walk always leaves through the lowest-indexed remaining edge and
//! decrements `remaining` for every edge it consumes. On a dead end it
//! un-walks one step: the dead-end vertex moves to the closed suffix and the
//! edge it came through is held as the pending compensation. That edge stays
//! consumed. It is already accounted for by the suffix, so nothing is
//! re-credited and no multiplicity can be lost or walked twice.
//!
//! The next forward step must leave from the tail of the held edge. It opens
//! a detour that is spliced in front of the held edge, and clears the flag.
//! Consecutive dead ends replace the held edge, one per unwound vertex.
//!
//! Every step either consumes an edge or moves one vertex to the suffix, so
//! the loop runs at most `2 * E` times. The loop stops as soon as the budget
//! reaches zero, without unwinding the open walk: the circuit is the open walk
//! followed by the suffix.

use crate::graph::Graph;

use super::work::WorkMatrix;
use super::{Algorithm, CircuitError};

/// 0-based circuit from `start`. The graph must be feasible and non-trivial.
pub(crate) fn circuit(graph: &Graph, start: usize) -> Result<Vec<usize>, CircuitError> {
    let mut work = WorkMatrix::of(graph);
    let mut remaining = graph.edge_count();
    let mut path: Vec<usize> = Vec::new();
    // closed suffix, last vertex of the circuit first
    let mut closed: Vec<usize> = Vec::new();
    let mut current = start;

    let mut compensate = false;
    let mut compensated_vertex = start;
    let mut compensated_neighbor = start;

    while remaining > 0 {
        match work.first_neighbor(current) {
            Some(next) => {
                if compensate {
                    debug_assert_eq!(current, compensated_vertex);
                    tracing::trace!(
                        vertex = compensated_vertex + 1,
                        neighbor = compensated_neighbor + 1,
                        "detour spliced before held edge"
                    );
                    compensate = false;
                }
                path.push(current);
                work.cut(current, next);
                remaining -= 1;
                current = next;
            }
            None => {
                let Some(prev) = path.pop() else {
                    tracing::warn!(at = current + 1, remaining = %remaining, "walk unwound to its start");
                    return Err(CircuitError::Stalled {
                        algorithm: Algorithm::HierholzerCompensating,
                        at: current + 1,
                        remaining,
                    });
                };
                closed.push(current);
                tracing::trace!(from = current + 1, to = prev + 1, remaining = %remaining, "backtrack");
                compensated_vertex = prev;
                compensated_neighbor = current;
                compensate = true;
                current = prev;
            }
        }
    }
    path.push(current);
    path.extend(closed.into_iter().rev());
    debug_assert_eq!(path.last(), Some(&start));
    Ok(path)
}
