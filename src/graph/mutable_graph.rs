use crate::error::GraphError;
use crate::graph::base_graph::BaseGraph;

pub trait MutableGraph: BaseGraph + Sized {
    /// Empty graph on `n` vertices. Fails for `n == 0` or when the backing
    /// storage cannot be allocated.
    fn with_order(n: usize, directed: bool) -> Result<Self, GraphError>;

    /// Inserts the arc `u -> v` (0-based), and `v -> u` unless directed.
    /// Returns `true` if the forward arc was new; an existing edge is a no-op.
    fn add_edge(&mut self, u: usize, v: usize) -> Result<bool, GraphError>;

    fn add_edges<I: IntoIterator<Item = (usize, usize)>>(
        &mut self,
        edges: I,
    ) -> Result<usize, GraphError> {
        let mut added = 0;
        for (u, v) in edges {
            if self.add_edge(u, v)? {
                added += 1;
            }
        }
        Ok(added)
    }
}

/// Checks 0-based `u` and `v` against `order`, reporting them 1-based.
pub(crate) fn check_edge_bounds(order: usize, u: usize, v: usize) -> Result<(), GraphError> {
    for x in [u, v].iter() {
        if *x >= order {
            return Err(GraphError::vertex_out_of_range(x.saturating_add(1), order));
        }
    }
    Ok(())
}
