#![forbid(unsafe_code)]

//! Graph container APIs used by `dagkit`.
//!
//! The container is a directed graph keyed by node id and edge id. Edges carry their own id so
//! several edges may connect the same ordered pair of nodes (multigraph mode). Nodes and edges
//! keep insertion order, which makes every traversal built on top of them deterministic.

mod error;
mod graph;

pub use error::{GraphError, Result};
pub use graph::{EdgeRef, Graph, GraphOptions, RemovedNode, alg};
