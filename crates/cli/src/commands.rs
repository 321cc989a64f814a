//! Subcommand bodies. Each returns a serializable report; `main` decides where it goes.

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use eulerian::prelude::*;
use serde::Serialize;
use std::path::Path;

use crate::classify::{classify, KindArg};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlgoArg {
    Fast,
    Compensating,
    Fleury,
    All,
}

impl AlgoArg {
    pub fn algorithms(self) -> Vec<Algorithm> {
        match self {
            AlgoArg::Fast => vec![Algorithm::HierholzerFast],
            AlgoArg::Compensating => vec![Algorithm::HierholzerCompensating],
            AlgoArg::Fleury => vec![Algorithm::FleuryLike],
            AlgoArg::All => Algorithm::ALL.to_vec(),
        }
    }
}

/// Read a JSON array of integer rows and turn it into a validated graph.
pub fn load_graph(path: &Path, kind: KindArg) -> Result<Graph> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let rows: Vec<Vec<i64>> = serde_json::from_str(&text)
        .with_context(|| format!("parsing {} as a JSON matrix", path.display()))?;
    let m = Matrix::from_rows(rows).context("building adjacency matrix")?;
    let kind = classify(&m, kind);
    tracing::info!(%kind, vertices = m.rows(), "graph loaded");
    Graph::new(m, kind).with_context(|| format!("not a valid {kind} graph"))
}

#[derive(Debug, Serialize)]
pub struct SolveReport {
    pub kind: String,
    pub vertices: usize,
    pub edges: u128,
    pub feasible: bool,
    pub results: Vec<SolveEntry>,
}

#[derive(Debug, Serialize)]
pub struct SolveEntry {
    pub algorithm: String,
    pub start: usize,
    /// `circuit`, `trivial`, `none` or `stalled`.
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertices: Option<Vec<usize>>,
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn solve(graph: &Graph, algo: AlgoArg, start: Option<usize>) -> Result<SolveReport> {
    let n = graph.vertex_count();
    let starts: Vec<usize> = match start {
        Some(s) if s == 0 || s > n => bail!("start vertex {s} is not in 1..={n}"),
        Some(s) => vec![s],
        None => (1..=n).collect(),
    };
    let mut results = Vec::new();
    for algorithm in algo.algorithms() {
        for &s in &starts {
            let row = match find_euler_circuit(graph, s, algorithm) {
                Ok(EulerCircuit::Circuit(walk)) => {
                    let verified = verify_circuit(graph, &walk).is_ok();
                    if !verified {
                        tracing::warn!(%algorithm, start = s, "circuit failed verification");
                    }
                    entry(algorithm, s, "circuit", Some(walk), verified, None)
                }
                Ok(EulerCircuit::Trivial) => entry(algorithm, s, "trivial", None, true, None),
                Ok(EulerCircuit::NoCircuit) => entry(algorithm, s, "none", None, true, None),
                Err(e @ CircuitError::Stalled { .. }) => {
                    entry(algorithm, s, "stalled", None, false, Some(e.to_string()))
                }
                Err(e) => return Err(e.into()),
            };
            results.push(row);
        }
    }
    Ok(SolveReport {
        kind: graph.kind().to_string(),
        vertices: n,
        edges: graph.edge_count(),
        feasible: has_euler_circuit(graph)?,
        results,
    })
}

fn entry(
    algorithm: Algorithm,
    start: usize,
    status: &'static str,
    vertices: Option<Vec<usize>>,
    verified: bool,
    error: Option<String>,
) -> SolveEntry {
    SolveEntry {
        algorithm: algorithm.to_string(),
        start,
        status,
        vertices,
        verified,
        error,
    }
}

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub kind: String,
    pub vertices: usize,
    pub edges: u128,
    pub degrees: Vec<u128>,
    pub connective: bool,
    pub feasible: bool,
}

pub fn check(graph: &Graph) -> Result<CheckReport> {
    let degrees = (1..=graph.vertex_count())
        .map(|v| graph.degree(v))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CheckReport {
        kind: graph.kind().to_string(),
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        degrees,
        connective: is_connective(graph.adjacency())?,
        feasible: has_euler_circuit(graph)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_matrix(dir: &Path, name: &str, json: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn solve_reports_every_start_and_algorithm() {
        let dir = tempdir().unwrap();
        let path = write_matrix(
            dir.path(),
            "a.json",
            "[[0,1,0,1],[1,0,1,2],[0,1,0,1],[1,2,1,0]]",
        );
        let g = load_graph(&path, KindArg::Auto).unwrap();
        assert_eq!(g.kind(), GraphKind::Undirected);
        let report = solve(&g, AlgoArg::All, None).unwrap();
        assert!(report.feasible);
        assert_eq!(report.edges, 6);
        assert_eq!(report.results.len(), 12);
        assert!(report
            .results
            .iter()
            .all(|e| e.status == "circuit" && e.verified));
    }

    #[test]
    fn solve_single_start_and_bad_start() {
        let dir = tempdir().unwrap();
        let path = write_matrix(dir.path(), "b.json", "[[0,1,1],[0,0,1],[0,0,0]]");
        let g = load_graph(&path, KindArg::Auto).unwrap();
        assert_eq!(g.kind(), GraphKind::Directed);
        let report = solve(&g, AlgoArg::Fast, Some(2)).unwrap();
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].status, "none");
        assert!(solve(&g, AlgoArg::Fast, Some(4)).is_err());
    }

    #[test]
    fn check_reports_degrees() {
        let dir = tempdir().unwrap();
        let path = write_matrix(dir.path(), "d.json", "[[0,1,1],[1,0,2],[1,2,0]]");
        let report = check(&load_graph(&path, KindArg::Auto).unwrap()).unwrap();
        assert_eq!(report.degrees, vec![2, 3, 3]);
        assert!(report.connective);
        assert!(!report.feasible);
    }

    #[test]
    fn load_rejects_bad_input() {
        let dir = tempdir().unwrap();
        let ragged = write_matrix(dir.path(), "r.json", "[[0,1],[1]]");
        assert!(load_graph(&ragged, KindArg::Auto).is_err());
        let garbage = write_matrix(dir.path(), "g.json", "not json");
        assert!(load_graph(&garbage, KindArg::Auto).is_err());
        let asym = write_matrix(dir.path(), "s.json", "[[0,1],[0,0]]");
        assert!(load_graph(&asym, KindArg::Undirected).is_err());
        assert!(load_graph(&dir.path().join("missing.json"), KindArg::Auto).is_err());
    }

    #[test]
    fn single_vertex_is_trivial() {
        let dir = tempdir().unwrap();
        let path = write_matrix(dir.path(), "c.json", "[[0]]");
        let g = load_graph(&path, KindArg::Auto).unwrap();
        let report = solve(&g, AlgoArg::Compensating, None).unwrap();
        assert_eq!(report.results[0].status, "trivial");
    }
}
