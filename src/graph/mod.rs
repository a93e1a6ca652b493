pub use adjacency_list::AdjacencyListGraph;
pub use adjacency_matrix::AdjacencyMatrixGraph;
pub use base_graph::BaseGraph;
pub use graph::{Graph, Representation};
pub use mutable_graph::MutableGraph;

mod adjacency_list;
mod adjacency_matrix;
mod base_graph;
mod graph;
mod mutable_graph;
