#![forbid(unsafe_code)]

//! Graph state and validity engine for an interactive DAG canvas.
//!
//! [`GraphStore`] owns nodes, edges and selection and re-checks acyclicity after every change
//! to the edge set. [`Canvas`] sits on top of it and turns host events (change batches, connect
//! requests, toolbar commands, key presses) into store calls, user notices and deferred
//! viewport requests. Layout is pluggable through [`LayoutAdapter`].

pub mod canvas;
pub mod changes;
pub mod config;
pub mod connect;
pub mod cycle;
pub mod error;
pub mod ids;
pub mod layout;
pub mod model;
pub mod notice;
pub mod selection;
pub mod spawn;
pub mod store;

pub use canvas::{Canvas, Event, Snapshot};
pub use changes::{EdgeChange, NodeChange};
pub use config::CanvasConfig;
pub use connect::Connection;
pub use cycle::DagStatus;
pub use error::{Error, LayoutError, Rejection, Result};
pub use layout::{Direction, LayoutAdapter, LayoutInput, Positions, ViewportRequest};
pub use model::{Edge, EdgeId, Handles, Node, NodeId, Position, Side};
pub use notice::{Notice, Severity};
pub use selection::SelectionTracker;
pub use store::{GraphStore, Removal};

#[cfg(test)]
mod tests;
