use crate::datastructures::BitSet;
use crate::error::{GraphError, GraphErrorKind};
use crate::graph::base_graph::BaseGraph;
use crate::graph::mutable_graph::{check_edge_bounds, MutableGraph};

/// Dense storage: a single flat `n * n` presence bitset, row `u` holding the
/// out-arcs of `u`. Degrees are tracked per row.
#[derive(Clone, Debug)]
pub struct AdjacencyMatrixGraph {
    order: usize,
    matrix: BitSet,
    degrees: Vec<usize>,
    edge_count: usize,
    directed: bool,
}

impl AdjacencyMatrixGraph {
    #[inline]
    fn index(&self, u: usize, v: usize) -> usize {
        u * self.order + v
    }

    /// Sets the bit for `u -> v`, returning whether it was unset before.
    fn set_arc(&mut self, u: usize, v: usize) -> bool {
        let idx = self.index(u, v);
        if self.matrix.set_bit(idx) {
            false
        } else {
            self.degrees[u] += 1;
            true
        }
    }
}

impl BaseGraph for AdjacencyMatrixGraph {
    fn order(&self) -> usize {
        self.order
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn degree(&self, u: usize) -> usize {
        self.degrees[u]
    }

    fn has_edge(&self, u: usize, v: usize) -> bool {
        self.matrix[self.index(u, v)]
    }

    fn neighborhood(&self, u: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        let start = u * self.order;
        Box::new(
            self.matrix
                .iter_range(start, start + self.order)
                .map(move |idx| idx - start),
        )
    }
}

impl MutableGraph for AdjacencyMatrixGraph {
    fn with_order(n: usize, directed: bool) -> Result<Self, GraphError> {
        if n == 0 {
            return Err(GraphError::new(
                GraphErrorKind::InvalidArgument,
                "a graph needs at least one vertex",
            ));
        }
        let size = n.checked_mul(n).ok_or_else(|| {
            GraphError::new(
                GraphErrorKind::AllocationFailure,
                "adjacency matrix size overflows",
            )
        })?;
        let matrix = BitSet::try_new(size)?;
        let mut degrees: Vec<usize> = Vec::new();
        degrees.try_reserve_exact(n)?;
        degrees.resize(n, 0);
        Ok(Self {
            order: n,
            matrix,
            degrees,
            edge_count: 0,
            directed,
        })
    }

    fn add_edge(&mut self, u: usize, v: usize) -> Result<bool, GraphError> {
        check_edge_bounds(self.order, u, v)?;
        if !self.set_arc(u, v) {
            return Ok(false);
        }
        if !self.directed {
            self.set_arc(v, u);
        }
        self.edge_count += 1;
        Ok(true)
    }
}
