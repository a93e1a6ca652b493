//! Simple graphs on vertices `1..=n`, stored either as adjacency lists or as
//! an adjacency matrix, with BFS, DFS and connected components written once
//! against the [`graph::BaseGraph`] trait.
pub(crate) mod datastructures;

pub mod analysis;
pub mod components;
pub mod error;
pub mod graph;
pub mod io;
pub mod measure;
pub mod traversal;

#[cfg(feature = "logging")]
pub mod log;
#[cfg(feature = "handle-ctrlc")]
pub mod signals;

pub use components::{Component, ComponentSummary};
pub use error::{GraphError, GraphErrorKind};
pub use graph::{Graph, Representation};
pub use io::{load, write_summary};
pub use traversal::SearchTree;
