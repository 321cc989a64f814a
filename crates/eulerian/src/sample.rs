//! Random Eulerian multigraphs (base cycle + closed walks, replay tokens).
//!
//! Purpose
//! - Feed benches, property tests and the CLI with graphs that are known to
//!   admit an Euler circuit, without hand-writing matrices.
//!
//! Model
//! - A base cycle `1 -> 2 -> ... -> n -> 1` makes the graph connective.
//! - `walks` random closed walks are laid on top. A closed walk keeps every
//!   vertex balanced (even degree, or in = out), so the union stays Eulerian.
//! - Determinism uses a replay token `(seed, index)` placed directly into the
//!   ChaCha key of `StdRng`, so distinct tokens give independent streams.

use nalgebra::DMatrix;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::graph::{Graph, GraphKind};
use crate::matrix::Matrix;

/// Eulerian sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct EulerianCfg {
    pub vertices: usize,
    /// Closed walks added on top of the base cycle.
    pub walks: usize,
    /// Upper bound on steps per walk before it returns to its start. Values below 1 act as 1.
    pub walk_len: usize,
    pub kind: GraphKind,
    /// Allow walks to step from a vertex to itself.
    pub self_loops: bool,
}
impl Default for EulerianCfg {
    fn default() -> Self {
        Self {
            vertices: 6,
            walks: 3,
            walk_len: 4,
            kind: GraphKind::Undirected,
            self_loops: false,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Key layout: seed (8 bytes LE) | index (8 bytes LE) | fixed tag.
    fn rng(self) -> StdRng {
        let mut key = [0u8; 32];
        key[..8].copy_from_slice(&self.seed.to_le_bytes());
        key[8..16].copy_from_slice(&self.index.to_le_bytes());
        key[16..].copy_from_slice(SEED_TAG);
        StdRng::from_seed(key)
    }
}

const SEED_TAG: &[u8; 16] = b"eulerian-sample!";

/// Draw a connective, balanced multigraph. `None` when `cfg.vertices == 0`.
///
/// With one vertex and `self_loops == false` the result is the trivial graph.
pub fn draw_eulerian(cfg: EulerianCfg, tok: ReplayToken) -> Option<Graph> {
    let n = cfg.vertices;
    if n == 0 {
        return None;
    }
    let mut rng = tok.rng();
    let mut a = DMatrix::<i64>::zeros(n, n);
    if n >= 2 {
        for v in 0..n {
            add_edge(&mut a, cfg.kind, v, (v + 1) % n);
        }
    }
    for _ in 0..cfg.walks {
        let len = rng.gen_range(1..=cfg.walk_len.max(1));
        let start = rng.gen_range(0..n);
        let mut current = start;
        for _ in 0..len {
            let Some(next) = step(&mut rng, n, current, cfg.self_loops) else {
                break;
            };
            add_edge(&mut a, cfg.kind, current, next);
            current = next;
        }
        if current != start {
            add_edge(&mut a, cfg.kind, current, start);
        }
    }
    tracing::debug!(
        vertices = n,
        kind = %cfg.kind,
        seed = tok.seed,
        index = tok.index,
        "drew eulerian graph"
    );
    Graph::new(Matrix::from(a), cfg.kind).ok()
}

/// Uniform next vertex, skipping `current` unless loops are allowed.
fn step<R: Rng>(rng: &mut R, n: usize, current: usize, self_loops: bool) -> Option<usize> {
    if self_loops {
        return Some(rng.gen_range(0..n));
    }
    if n < 2 {
        return None;
    }
    let w = rng.gen_range(0..n - 1);
    Some(if w >= current { w + 1 } else { w })
}

fn add_edge(a: &mut DMatrix<i64>, kind: GraphKind, v: usize, w: usize) {
    match kind {
        GraphKind::Directed => a[(v, w)] += 1,
        GraphKind::Undirected if v == w => a[(v, v)] += 2,
        GraphKind::Undirected => {
            a[(v, w)] += 1;
            a[(w, v)] += 1;
        }
    }
}
