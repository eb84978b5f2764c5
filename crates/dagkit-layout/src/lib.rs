#![forbid(unsafe_code)]

//! Layered (Sugiyama-style) graph layout.
//!
//! The pipeline follows dagre's phases: cycles are broken by reversing a feedback arc set, self
//! edges are set aside, nodes are ranked by longest path, rank layers are ordered with
//! barycenter sweeps to reduce crossings, and finally coordinates are assigned and rotated for
//! the requested rank direction. Reversed and self edges are restored before returning, so the
//! caller gets back the graph it passed in, with `x`/`y` filled in.

pub use dagkit_graphlib as graphlib;

pub mod acyclic;
pub mod coordinate_system;
pub mod order;
pub mod position;
pub mod rank;
pub mod self_edges;

use graphlib::Graph;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankDir {
    #[default]
    TB,
    BT,
    LR,
    RL,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOptions {
    pub rankdir: RankDir,
    /// Horizontal gap between neighbouring nodes in the same rank.
    pub nodesep: f64,
    /// Gap between consecutive ranks.
    pub ranksep: f64,
    /// Number of barycenter sweeps; the best ordering seen is kept.
    pub order_iterations: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            rankdir: RankDir::TB,
            nodesep: 50.0,
            ranksep: 50.0,
            order_iterations: 4,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeLabel {
    pub width: f64,
    pub height: f64,
    /// Centre of the node once laid out.
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub rank: Option<i32>,
    pub order: Option<usize>,
}

impl NodeLabel {
    pub fn sized(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeLabel {
    pub weight: f64,
    pub minlen: usize,
    pub reversed: bool,
}

impl Default for EdgeLabel {
    fn default() -> Self {
        Self {
            weight: 1.0,
            minlen: 1,
            reversed: false,
        }
    }
}

pub type LayoutGraph = Graph<NodeLabel, EdgeLabel>;

/// Runs the full layout pipeline in place.
///
/// Fails before any change when breaking cycles would need a parallel edge and `g` is not a
/// multigraph.
pub fn layout(g: &mut LayoutGraph, options: &LayoutOptions) -> graphlib::Result<()> {
    acyclic::run(g)?;
    let self_edges = self_edges::remove(g);
    rank::rank(g);
    order::order(g, options.order_iterations);
    coordinate_system::adjust(g, options.rankdir);
    position::position(g, options.nodesep, options.ranksep);
    coordinate_system::undo(g, options.rankdir);
    translate_to_origin(g);
    acyclic::undo(g)?;
    self_edges::restore(g, self_edges)
}

/// Shifts the drawing so its bounding box starts at `(0, 0)`.
fn translate_to_origin(g: &mut LayoutGraph) {
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    for (_, n) in g.nodes() {
        if let (Some(x), Some(y)) = (n.x, n.y) {
            min_x = min_x.min(x - n.width / 2.0);
            min_y = min_y.min(y - n.height / 2.0);
        }
    }
    if !min_x.is_finite() || !min_y.is_finite() {
        return;
    }
    g.for_each_node_mut(|_, n| {
        if let Some(x) = n.x.as_mut() {
            *x -= min_x;
        }
        if let Some(y) = n.y.as_mut() {
            *y -= min_y;
        }
    });
}
