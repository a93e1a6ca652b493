use std::fmt::Debug;

/// Read access to a graph with vertices `0..order()`.
///
/// Traversals and component extraction only go through this trait, so both
/// storage variants share one implementation of every algorithm.
pub trait BaseGraph: Debug {
    fn order(&self) -> usize;
    fn edge_count(&self) -> usize;
    fn is_directed(&self) -> bool;
    fn degree(&self, u: usize) -> usize;
    fn has_edge(&self, u: usize, v: usize) -> bool;
    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(0..self.order())
    }
    /// Out-neighbours of `u`: insertion order for lists, ascending for matrices.
    fn neighborhood(&self, u: usize) -> Box<dyn Iterator<Item = usize> + '_>;
}
