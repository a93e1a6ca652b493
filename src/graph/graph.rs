use crate::components::{connected_components, Component};
use crate::error::{GraphError, GraphErrorKind};
use crate::graph::adjacency_list::AdjacencyListGraph;
use crate::graph::adjacency_matrix::AdjacencyMatrixGraph;
use crate::graph::base_graph::BaseGraph;
use crate::graph::mutable_graph::MutableGraph;
use crate::traversal::{bfs, dfs, SearchTree};
use core::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Representation {
    List,
    Matrix,
}

impl Default for Representation {
    fn default() -> Self {
        Self::List
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::List => f.write_str("list"),
            Self::Matrix => f.write_str("matrix"),
        }
    }
}

impl FromStr for Representation {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "list" => Ok(Self::List),
            "matrix" => Ok(Self::Matrix),
            _ => {
                let msg = format!("unknown representation '{}', expected list or matrix", s);
                Err(GraphError::new(GraphErrorKind::InvalidArgument, &msg))
            }
        }
    }
}

/// A graph on vertices `1..=n` whose storage is chosen once at construction.
///
/// All methods taking vertex ids are 1-based and return
/// [`GraphErrorKind::InvalidArgument`] for ids outside `[1, n]`.
#[derive(Clone, Debug)]
pub enum Graph {
    List(AdjacencyListGraph),
    Matrix(AdjacencyMatrixGraph),
}

impl Graph {
    pub fn new(n: usize, representation: Representation, directed: bool) -> Result<Self, GraphError> {
        let graph = match representation {
            Representation::List => Self::List(AdjacencyListGraph::with_order(n, directed)?),
            Representation::Matrix => Self::Matrix(AdjacencyMatrixGraph::with_order(n, directed)?),
        };
        #[cfg(feature = "log")]
        log::debug!(
            "created {} graph with {} vertices (directed: {})",
            representation,
            n,
            directed
        );
        Ok(graph)
    }

    pub fn representation(&self) -> Representation {
        match self {
            Self::List(_) => Representation::List,
            Self::Matrix(_) => Representation::Matrix,
        }
    }

    fn base(&self) -> &dyn BaseGraph {
        match self {
            Self::List(g) => g as &dyn BaseGraph,
            Self::Matrix(g) => g as &dyn BaseGraph,
        }
    }

    fn index_of(&self, v: usize) -> Result<usize, GraphError> {
        if v == 0 || v > self.order() {
            Err(GraphError::vertex_out_of_range(v, self.order()))
        } else {
            Ok(v - 1)
        }
    }

    /// Inserts edge `u - v` (arc `u -> v` when directed). Re-inserting an
    /// existing edge changes nothing. Returns whether the edge was new.
    pub fn insert_edge(&mut self, u: usize, v: usize) -> Result<bool, GraphError> {
        let u = self.index_of(u)?;
        let v = self.index_of(v)?;
        match self {
            Self::List(g) => g.add_edge(u, v),
            Self::Matrix(g) => g.add_edge(u, v),
        }
    }

    pub fn degree(&self, v: usize) -> Result<usize, GraphError> {
        let v = self.index_of(v)?;
        Ok(self.base().degree(v))
    }

    pub fn has_edge(&self, u: usize, v: usize) -> Result<bool, GraphError> {
        let u = self.index_of(u)?;
        let v = self.index_of(v)?;
        Ok(self.base().has_edge(u, v))
    }

    /// 1-based neighbours of `v` in storage order.
    pub fn neighbors(&self, v: usize) -> Result<Vec<usize>, GraphError> {
        let v = self.index_of(v)?;
        Ok(self.base().neighborhood(v).map(|u| u + 1).collect())
    }

    pub fn bfs(&self, start: usize) -> Result<SearchTree, GraphError> {
        let start = self.index_of(start)?;
        bfs(self, start)
    }

    pub fn dfs(&self, start: usize) -> Result<SearchTree, GraphError> {
        let start = self.index_of(start)?;
        dfs(self, start)
    }

    pub fn connected_components(&self) -> Result<Vec<Component>, GraphError> {
        connected_components(self)
    }
}

impl BaseGraph for Graph {
    fn order(&self) -> usize {
        self.base().order()
    }

    fn edge_count(&self) -> usize {
        self.base().edge_count()
    }

    fn is_directed(&self) -> bool {
        self.base().is_directed()
    }

    fn degree(&self, u: usize) -> usize {
        self.base().degree(u)
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.base().has_edge(u, v)
    }

    fn neighborhood(&self, u: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        self.base().neighborhood(u)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Graph n={} m={} rep={} directed={}",
            self.order(),
            self.edge_count(),
            self.representation(),
            u8::from(self.is_directed())
        )?;
        for u in self.vertices() {
            write!(f, "{}:", u + 1)?;
            for v in self.neighborhood(u) {
                write!(f, " {}", v + 1)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::GraphErrorKind;
    use crate::graph::{BaseGraph, Graph, Representation};
    use rand::prelude::StdRng;
    use rand::{Rng, SeedableRng};

    const BOTH: [Representation; 2] = [Representation::List, Representation::Matrix];

    fn random_edges(rng: &mut StdRng, n: usize, m: usize) -> Vec<(usize, usize)> {
        (0..m)
            .map(|_| (rng.gen_range(1..=n), rng.gen_range(1..=n)))
            .collect()
    }

    #[test]
    fn representations_agree_on_degrees() {
        let mut rng = StdRng::seed_from_u64(7);
        for &directed in &[false, true] {
            for n in 1..30 {
                let edges = random_edges(&mut rng, n, 3 * n);
                let mut list = Graph::new(n, Representation::List, directed).unwrap();
                let mut matrix = Graph::new(n, Representation::Matrix, directed).unwrap();
                for &(u, v) in &edges {
                    let a = list.insert_edge(u, v).unwrap();
                    let b = matrix.insert_edge(u, v).unwrap();
                    assert_eq!(a, b);
                }
                assert_eq!(list.edge_count(), matrix.edge_count());
                for v in 1..=n {
                    assert_eq!(list.degree(v).unwrap(), matrix.degree(v).unwrap());
                    let mut a = list.neighbors(v).unwrap();
                    a.sort_unstable();
                    assert_eq!(a, matrix.neighbors(v).unwrap());
                }
            }
        }
    }

    #[test]
    fn insertion_is_idempotent() {
        for &rep in &BOTH {
            let mut graph = Graph::new(4, rep, false).unwrap();
            assert!(graph.insert_edge(1, 3).unwrap());
            let snapshot = graph.to_string();
            assert!(!graph.insert_edge(1, 3).unwrap());
            assert!(!graph.insert_edge(3, 1).unwrap());
            assert_eq!(graph.to_string(), snapshot);
            assert_eq!(graph.edge_count(), 1);
        }
    }

    #[test]
    fn undirected_insert_bumps_both_degrees() {
        for &rep in &BOTH {
            let mut graph = Graph::new(5, rep, false).unwrap();
            graph.insert_edge(1, 2).unwrap();
            let (du, dv) = (graph.degree(2).unwrap(), graph.degree(5).unwrap());
            graph.insert_edge(2, 5).unwrap();
            assert_eq!(graph.degree(2).unwrap(), du + 1);
            assert_eq!(graph.degree(5).unwrap(), dv + 1);
            assert!(graph.has_edge(5, 2).unwrap());
        }
    }

    #[test]
    fn out_of_range_queries_fail() {
        for &rep in &BOTH {
            let mut graph = Graph::new(3, rep, false).unwrap();
            assert_eq!(
                graph.degree(0).unwrap_err().kind(),
                GraphErrorKind::InvalidArgument
            );
            assert_eq!(
                graph.degree(4).unwrap_err().kind(),
                GraphErrorKind::InvalidArgument
            );
            assert!(graph.insert_edge(0, 1).is_err());
            assert!(graph.insert_edge(1, 4).is_err());
            assert!(graph.bfs(4).is_err());
            assert!(graph.dfs(0).is_err());
            assert_eq!(graph.edge_count(), 0);
        }
    }

    #[test]
    fn zero_vertices_is_invalid() {
        for &rep in &BOTH {
            let err = Graph::new(0, rep, false).unwrap_err();
            assert_eq!(err.kind(), GraphErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn representation_parses_and_prints() {
        assert_eq!("list".parse::<Representation>().unwrap(), Representation::List);
        assert_eq!("Matrix".parse::<Representation>().unwrap(), Representation::Matrix);
        assert!("csr".parse::<Representation>().is_err());
        assert_eq!(Representation::Matrix.to_string(), "matrix");
        let graph = Graph::new(2, Representation::Matrix, true).unwrap();
        assert_eq!(graph.representation(), Representation::Matrix);
        assert!(graph.is_directed());
    }

    #[test]
    fn display_lists_adjacency() {
        let mut graph = Graph::new(3, Representation::List, false).unwrap();
        graph.insert_edge(1, 3).unwrap();
        graph.insert_edge(1, 2).unwrap();
        assert_eq!(
            graph.to_string(),
            "Graph n=3 m=2 rep=list directed=0\n1: 3 2\n2: 1\n3: 1\n"
        );
    }
}
