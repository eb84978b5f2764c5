//! Boundary to the layout engine.
//!
//! The core never computes coordinates itself: it hands the current nodes and edges to a
//! [`LayoutAdapter`] and applies whatever positions come back.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::model::{Edge, Node, NodeId, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "TB")]
    TopToBottom,
    #[serde(rename = "LR")]
    LeftToRight,
}

/// Snapshot handed to a [`LayoutAdapter`]. Nodes and edges are in store order.
#[derive(Debug, Clone)]
pub struct LayoutInput<'a> {
    pub nodes: Vec<&'a Node>,
    pub edges: Vec<&'a Edge>,
    pub direction: Direction,
}

pub type Positions = IndexMap<NodeId, Position>;

pub trait LayoutAdapter {
    /// Top-left positions for (a subset of) `input.nodes`.
    fn layout(&self, input: &LayoutInput<'_>) -> Result<Positions, LayoutError>;
}

impl<F> LayoutAdapter for F
where
    F: Fn(&LayoutInput<'_>) -> Result<Positions, LayoutError>,
{
    fn layout(&self, input: &LayoutInput<'_>) -> Result<Positions, LayoutError> {
        self(input)
    }
}

/// Adapter that leaves every node where it is.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLayout;

impl LayoutAdapter for NoopLayout {
    fn layout(&self, _input: &LayoutInput<'_>) -> Result<Positions, LayoutError> {
        Ok(Positions::new())
    }
}

/// Cosmetic request for the host's viewport. Queued after a layout is applied and drained by the
/// host on its next tick; it never touches graph state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ViewportRequest {
    #[serde(rename_all = "camelCase")]
    FitView { padding: f64, duration_ms: u64 },
}
