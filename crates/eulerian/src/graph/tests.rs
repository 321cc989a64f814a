use super::*;
use crate::matrix::{Matrix, MatrixError};

#[test]
fn undirected_degrees_and_edges() {
    // doubled edge between 2 and 4
    let g = Graph::undirected(vec![
        vec![0, 1, 0, 1],
        vec![1, 0, 1, 2],
        vec![0, 1, 0, 1],
        vec![1, 2, 1, 0],
    ])
    .unwrap();
    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.edge_count(), 6);
    let degrees: Vec<u128> = (1..=4).map(|v| g.degree(v).unwrap()).collect();
    assert_eq!(degrees, vec![2, 4, 2, 4]);
    assert!(!g.is_trivial());
}

#[test]
fn undirected_self_loop_counts_twice() {
    let g = Graph::undirected(vec![vec![2, 1], vec![1, 0]]).unwrap();
    assert_eq!(g.degree(1).unwrap(), 3);
    assert_eq!(g.edge_count(), 2);
}

#[test]
fn directed_in_out_degrees() {
    let g = Graph::directed(vec![vec![0, 1, 1], vec![0, 0, 1], vec![0, 0, 0]]).unwrap();
    assert_eq!(g.edge_count(), 3);
    assert_eq!(g.out_degree(1).unwrap(), 2);
    assert_eq!(g.in_degree(1).unwrap(), 0);
    assert_eq!(g.in_degree(3).unwrap(), 2);
    assert_eq!(g.degree(2).unwrap(), 2);
    assert_eq!(
        g.out_degree(4).unwrap_err(),
        GraphError::VertexOutOfRange {
            vertex: 4,
            vertices: 3
        }
    );
    assert!(matches!(
        g.in_degree(0),
        Err(GraphError::VertexOutOfRange { vertex: 0, .. })
    ));
}

#[test]
fn rejects_each_violated_invariant() {
    let not_square = Matrix::from_rows(vec![vec![0, 1, 0], vec![1, 0, 1]]).unwrap();
    assert_eq!(
        Graph::new(not_square.clone(), GraphKind::Directed).unwrap_err(),
        GraphError::NotSquare { rows: 2, cols: 3 }
    );
    assert_eq!(
        Graph::new(not_square, GraphKind::Undirected).unwrap_err(),
        GraphError::NotSquare { rows: 2, cols: 3 }
    );
    assert_eq!(
        Graph::directed(vec![vec![0, 1], vec![-1, 0]]).unwrap_err(),
        GraphError::NegativeEntry {
            row: 2,
            col: 1,
            value: -1
        }
    );
    assert_eq!(
        Graph::undirected(vec![vec![0, 1, 0], vec![0, 0, 1], vec![0, 1, 0]]).unwrap_err(),
        GraphError::NotSymmetric { row: 1, col: 2 }
    );
    assert_eq!(
        Graph::undirected(vec![vec![0, 1], vec![1, 3]]).unwrap_err(),
        GraphError::OddSelfLoop {
            vertex: 2,
            count: 3
        }
    );
    assert_eq!(
        Graph::directed(vec![]).unwrap_err(),
        GraphError::Matrix(MatrixError::EmptyMatrix)
    );
}

#[test]
fn huge_multiplicities_count_without_overflow() {
    let max = i64::MAX;
    let d = Graph::directed(vec![vec![0, max], vec![max, 0]]).unwrap();
    assert_eq!(d.edge_count(), 2 * max as u128);
    assert_eq!(d.degree(1).unwrap(), 2 * max as u128);
    let u = Graph::undirected(vec![vec![max - 1, max], vec![max, 0]]).unwrap();
    assert_eq!(u.edge_count(), (max - 1) as u128 / 2 + max as u128);
    assert_eq!(u.out_degree(1).unwrap(), (max - 1) as u128 + max as u128);
}

#[test]
fn directed_accepts_what_undirected_rejects() {
    let rows = vec![vec![1, 1], vec![0, 0]];
    assert!(Graph::directed(rows.clone()).is_ok());
    assert!(Graph::undirected(rows).is_err());
}

#[test]
fn trivial_and_empty_graphs() {
    assert!(Graph::trivial().is_trivial());
    assert!(Graph::directed(vec![vec![0]]).unwrap().is_trivial());
    assert!(!Graph::directed(vec![vec![1]]).unwrap().is_trivial());
    let e = Graph::empty(3, GraphKind::Directed).unwrap();
    assert_eq!(e.edge_count(), 0);
    assert!(!e.is_trivial());
    assert!(Graph::empty(0, GraphKind::Undirected).is_err());
}

#[test]
fn equality_includes_kind() {
    let rows = vec![vec![0, 1], vec![1, 0]];
    let u = Graph::undirected(rows.clone()).unwrap();
    let d = Graph::directed(rows.clone()).unwrap();
    assert_ne!(u, d);
    assert_eq!(u, Graph::undirected(rows).unwrap());
}

#[test]
fn kind_parses_case_insensitively() {
    assert_eq!("Directed".parse::<GraphKind>().unwrap(), GraphKind::Directed);
    assert_eq!(
        "undirected".parse::<GraphKind>().unwrap(),
        GraphKind::Undirected
    );
    assert!("mixed".parse::<GraphKind>().is_err());
    assert_eq!(GraphKind::Undirected.to_string(), "undirected");
}
