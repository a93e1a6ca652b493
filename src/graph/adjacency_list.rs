use crate::error::{GraphError, GraphErrorKind};
use crate::graph::base_graph::BaseGraph;
use crate::graph::mutable_graph::{check_edge_bounds, MutableGraph};
use std::collections::TryReserveError;

const INITIAL_CAPACITY: usize = 4;

/// Sparse storage: one growable neighbour sequence per vertex, kept in
/// insertion order and free of duplicates.
#[derive(Clone, Debug)]
pub struct AdjacencyListGraph {
    data: Vec<Vec<usize>>,
    edge_count: usize,
    directed: bool,
}

/// Reserves room for one more neighbour: 4 slots on first use, then doubling.
fn ensure_capacity(neighbors: &mut Vec<usize>) -> Result<(), TryReserveError> {
    if neighbors.capacity() == 0 {
        neighbors.try_reserve_exact(INITIAL_CAPACITY)
    } else if neighbors.len() == neighbors.capacity() {
        let additional = neighbors.capacity();
        neighbors.try_reserve_exact(additional)
    } else {
        Ok(())
    }
}

/// Appends `v` unless present. Returns whether it was appended.
fn push_unique(neighbors: &mut Vec<usize>, v: usize) -> Result<bool, TryReserveError> {
    if neighbors.contains(&v) {
        return Ok(false);
    }
    ensure_capacity(neighbors)?;
    neighbors.push(v);
    Ok(true)
}

impl AdjacencyListGraph {
    pub fn neighborhood_slice(&self, u: usize) -> &[usize] {
        &self.data[u]
    }

    pub(crate) fn capacity_of(&self, u: usize) -> usize {
        self.data[u].capacity()
    }

    /// Forward arc with `push_unique`, reverse arc with `push_reverse`. If the
    /// reverse push fails, a freshly pushed forward arc is removed again.
    fn insert_arcs(
        &mut self,
        u: usize,
        v: usize,
        push_reverse: fn(&mut Vec<usize>, usize) -> Result<bool, TryReserveError>,
    ) -> Result<bool, GraphError> {
        let added = push_unique(&mut self.data[u], v)?;
        if !self.directed {
            if let Err(e) = push_reverse(&mut self.data[v], u) {
                if added {
                    self.data[u].pop();
                }
                return Err(e.into());
            }
        }
        if added {
            self.edge_count += 1;
        }
        Ok(added)
    }
}

impl BaseGraph for AdjacencyListGraph {
    fn order(&self) -> usize {
        self.data.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn degree(&self, u: usize) -> usize {
        self.data[u].len()
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.data[u].contains(&v)
    }

    fn neighborhood(&self, u: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.data[u].iter().copied())
    }
}

impl MutableGraph for AdjacencyListGraph {
    fn with_order(n: usize, directed: bool) -> Result<Self, GraphError> {
        if n == 0 {
            return Err(GraphError::new(
                GraphErrorKind::InvalidArgument,
                "a graph needs at least one vertex",
            ));
        }
        let mut data: Vec<Vec<usize>> = Vec::new();
        data.try_reserve_exact(n)?;
        data.resize_with(n, Vec::new);
        Ok(Self {
            data,
            edge_count: 0,
            directed,
        })
    }

    fn add_edge(&mut self, u: usize, v: usize) -> Result<bool, GraphError> {
        check_edge_bounds(self.data.len(), u, v)?;
        self.insert_arcs(u, v, push_unique)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::GraphErrorKind;
    use crate::graph::adjacency_list::AdjacencyListGraph;
    use crate::graph::base_graph::BaseGraph;
    use crate::graph::mutable_graph::MutableGraph;
    use std::collections::TryReserveError;

    #[test]
    fn test_order() {
        let graph = AdjacencyListGraph::with_order(5, false).unwrap();
        assert_eq!(graph.order(), 5);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.vertices().all(|v| graph.degree(v) == 0));

        let err = AdjacencyListGraph::with_order(0, false).unwrap_err();
        assert_eq!(err.kind(), GraphErrorKind::InvalidArgument);
    }

    #[test]
    fn test_degree() {
        let mut graph = AdjacencyListGraph::with_order(3, false).unwrap();
        assert!(graph.add_edge(0, 1).unwrap());

        assert_eq!(graph.degree(0), 1);
        assert_eq!(graph.degree(1), 1);
        assert_eq!(graph.edge_count(), 1);

        assert!(!graph.add_edge(0, 1).unwrap());
        assert!(!graph.add_edge(1, 0).unwrap());

        assert_eq!(graph.degree(0), 1);
        assert_eq!(graph.degree(1), 1);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn directed_keeps_one_direction() {
        let mut graph = AdjacencyListGraph::with_order(3, true).unwrap();
        graph.add_edge(0, 1).unwrap();
        assert!(graph.has_edge(0, 1));
        assert!(!graph.has_edge(1, 0));
        assert_eq!(graph.degree(1), 0);

        assert!(graph.add_edge(1, 0).unwrap());
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.degree(1), 1);
    }

    #[test]
    fn neighbours_keep_insertion_order() {
        let mut graph = AdjacencyListGraph::with_order(5, false).unwrap();
        graph.add_edge(2, 4).unwrap();
        graph.add_edge(2, 0).unwrap();
        graph.add_edge(2, 3).unwrap();
        assert_eq!(graph.neighborhood_slice(2), &[4, 0, 3]);
        let collected: Vec<usize> = graph.neighborhood(2).collect();
        assert_eq!(collected, vec![4, 0, 3]);
    }

    #[test]
    fn capacity_starts_at_four_and_doubles() {
        let mut graph = AdjacencyListGraph::with_order(10, true).unwrap();
        assert_eq!(graph.capacity_of(0), 0);
        graph.add_edge(0, 1).unwrap();
        assert!(graph.capacity_of(0) >= 4);
        for v in 2..6 {
            graph.add_edge(0, v).unwrap();
        }
        assert_eq!(graph.degree(0), 5);
        assert!(graph.capacity_of(0) >= 8);
    }

    #[test]
    fn out_of_range_is_rejected_without_change() {
        let mut graph = AdjacencyListGraph::with_order(2, false).unwrap();
        let err = graph.add_edge(0, 2).unwrap_err();
        assert_eq!(err.kind(), GraphErrorKind::InvalidArgument);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.degree(0), 0);
    }

    fn failing_push(_: &mut Vec<usize>, _: usize) -> Result<bool, TryReserveError> {
        Err(Vec::<u64>::new().try_reserve(usize::MAX).unwrap_err())
    }

    #[test]
    fn failed_reverse_push_leaves_no_half_edge() {
        let mut graph = AdjacencyListGraph::with_order(3, false).unwrap();
        graph.add_edge(0, 2).unwrap();

        let err = graph.insert_arcs(0, 1, failing_push).unwrap_err();
        assert_eq!(err.kind(), GraphErrorKind::AllocationFailure);
        assert!(!graph.has_edge(0, 1));
        assert_eq!(graph.neighborhood_slice(0), &[2]);
        assert_eq!(graph.edge_count(), 1);

        // an existing forward arc is kept when only the reverse push fails
        assert!(graph.insert_arcs(0, 2, failing_push).is_err());
        assert_eq!(graph.neighborhood_slice(0), &[2]);

        assert!(graph.add_edge(0, 1).unwrap());
        assert!(graph.has_edge(1, 0));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn self_loop_counts_once() {
        let mut graph = AdjacencyListGraph::with_order(2, false).unwrap();
        assert!(graph.add_edge(1, 1).unwrap());
        assert_eq!(graph.degree(1), 1);
        assert_eq!(graph.edge_count(), 1);
    }
}
