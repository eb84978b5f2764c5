//! The canonical node/edge state of a canvas.
//!
//! `GraphStore` is the only mutator of nodes, edges and selection. Every operation that changes
//! the edge set recomputes the DAG status before returning, and every removal prunes the
//! selection in the same call, so callers never observe a dangling edge or a stale selected id.

use dagkit_graphlib::{Graph, GraphOptions};
use tracing::{debug, info, trace};

use crate::changes::{EdgeChange, NodeChange};
use crate::config::CanvasConfig;
use crate::cycle::{self, DagStatus};
use crate::error::Rejection;
use crate::ids::{IdGenerator, IdStrategy};
use crate::layout::{Direction, LayoutAdapter, LayoutInput, Positions};
use crate::model::{Edge, EdgeId, ElementKind, Handles, Node, NodeId, Position};
use crate::selection::SelectionTracker;
use crate::spawn::Spawner;

/// Elements detached by a removal, in store order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Removal {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Removal {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct GraphStore {
    graph: Graph<Node, Edge>,
    selection: SelectionTracker,
    status: DagStatus,
    node_ids: IdGenerator,
    edge_ids: IdGenerator,
    spawner: Spawner,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphStore {
    /// An empty store with sequential ids and the default spawn area.
    pub fn new() -> Self {
        Self::from_parts(IdStrategy::Sequential, Spawner::new(Default::default(), None))
    }

    /// A store configured by `config`, seeded with the starter graph when it asks for one.
    pub fn with_config(config: &CanvasConfig) -> Self {
        let mut store = Self::from_parts(
            config.id_strategy,
            Spawner::new(config.spawn, config.seed),
        );
        if config.starter_graph {
            store.seed_starter_graph();
        }
        store
    }

    fn from_parts(strategy: IdStrategy, spawner: Spawner) -> Self {
        Self {
            graph: Graph::new(GraphOptions {
                multigraph: true,
                self_loops: false,
            }),
            selection: SelectionTracker::new(),
            status: DagStatus::Valid,
            node_ids: IdGenerator::new(strategy, "n"),
            edge_ids: IdGenerator::new(strategy, "e"),
            spawner,
        }
    }

    fn seed_starter_graph(&mut self) {
        let first = self.insert_node("Node 1".to_string(), Position::new(0.0, 0.0));
        let second = self.insert_node("Node 2".to_string(), Position::new(0.0, 100.0));
        if let Err(err) = self.insert_edge(&first, &second) {
            debug!(error = %err, "starter edge was not inserted");
        }
    }

    // ---- reads ----

    pub fn status(&self) -> DagStatus {
        self.status
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.nodes().map(|(_, node)| node)
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.graph.edges().map(|e| e.label)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.graph.node(id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.graph.edge(id)
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.graph.has_node(id)
    }

    pub fn has_edge(&self, id: &str) -> bool {
        self.graph.has_edge(id)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Selected node ids in selection order.
    pub fn selected_nodes(&self) -> impl Iterator<Item = &str> {
        self.selection.nodes()
    }

    /// Selected edge ids in selection order.
    pub fn selected_edges(&self) -> impl Iterator<Item = &str> {
        self.selection.edges()
    }

    /// First selected node in node order (not selection order).
    pub fn first_selected_node(&self) -> Option<&str> {
        self.graph
            .node_ids()
            .find(|id| self.selection.is_node_selected(id))
    }

    // ---- nodes ----

    /// Adds a node at a random spot inside the spawn area.
    pub fn add_node(&mut self, label: &str) -> Result<NodeId, Rejection> {
        let position = self.spawner.next_position();
        self.add_node_at(label, position)
    }

    pub fn add_node_at(&mut self, label: &str, position: Position) -> Result<NodeId, Rejection> {
        if label.trim().is_empty() {
            trace!("ignoring node with blank label");
            return Err(Rejection::EmptyLabel);
        }
        Ok(self.insert_node(label.to_string(), position))
    }

    fn insert_node(&mut self, label: String, position: Position) -> NodeId {
        let id = self.fresh_node_id();
        debug!(id = %id, label = %label, x = position.x, y = position.y, "node added");
        self.graph
            .set_node(id.clone(), Node::new(id.clone(), label, position));
        id
    }

    fn fresh_node_id(&mut self) -> NodeId {
        loop {
            let id = self.node_ids.next_id();
            if !self.graph.has_node(&id) {
                return id;
            }
        }
    }

    /// Stores a dragged position. Positions never affect the DAG status.
    pub fn move_node(&mut self, id: &str, position: Position) -> bool {
        match self.graph.node_mut(id) {
            Some(node) => {
                node.position = position;
                true
            }
            None => {
                trace!(id, "position change for unknown node");
                false
            }
        }
    }

    /// Removes `id` and every edge touching it.
    pub fn remove_node(&mut self, id: &str) -> Option<Removal> {
        let removal = self.detach_node(id)?;
        self.recompute_status();
        Some(removal)
    }

    fn detach_node(&mut self, id: &str) -> Option<Removal> {
        let removed = self.graph.remove_node(id)?;
        self.selection.forget_node(id);
        let mut edges = Vec::with_capacity(removed.edges.len());
        for (edge_id, edge) in removed.edges {
            self.selection.forget_edge(&edge_id);
            edges.push(edge);
        }
        debug!(id, cascaded = edges.len(), "node removed");
        Some(Removal {
            nodes: vec![removed.label],
            edges,
        })
    }

    // ---- edges ----

    /// Inserts `source -> target` under a fresh id. Parallel edges are allowed.
    pub fn insert_edge(&mut self, source: &str, target: &str) -> Result<EdgeId, Rejection> {
        if source == target {
            return Err(Rejection::SelfLoopRejected {
                id: source.to_string(),
            });
        }
        for endpoint in [source, target] {
            if !self.graph.has_node(endpoint) {
                return Err(Rejection::UnknownNode {
                    id: endpoint.to_string(),
                });
            }
        }

        let id = self.fresh_edge_id();
        self.graph
            .set_edge(id.clone(), source, target, Edge::new(id.clone(), source, target))?;
        debug!(id = %id, source, target, "edge added");
        self.recompute_status();
        Ok(id)
    }

    fn fresh_edge_id(&mut self) -> EdgeId {
        loop {
            let id = self.edge_ids.next_id();
            if !self.graph.has_edge(&id) {
                return id;
            }
        }
    }

    pub fn remove_edge(&mut self, id: &str) -> Option<Edge> {
        let edge = self.detach_edge(id)?;
        self.recompute_status();
        Some(edge)
    }

    fn detach_edge(&mut self, id: &str) -> Option<Edge> {
        let edge = self.graph.remove_edge(id)?;
        self.selection.forget_edge(id);
        debug!(id, "edge removed");
        Some(edge)
    }

    // ---- selection ----

    /// Marks a node (de)selected. Unknown ids are ignored.
    pub fn select_node(&mut self, id: &str, selected: bool) -> bool {
        let exists = self.graph.has_node(id);
        if !exists {
            trace!(id, "selection change for unknown node");
        }
        let changed = self
            .selection
            .apply(ElementKind::Node, id, selected, exists);
        if let Some(node) = self.graph.node_mut(id) {
            node.selected = selected;
        }
        changed
    }

    /// Marks an edge (de)selected. Unknown ids are ignored.
    pub fn select_edge(&mut self, id: &str, selected: bool) -> bool {
        let exists = self.graph.has_edge(id);
        if !exists {
            trace!(id, "selection change for unknown edge");
        }
        let changed = self
            .selection
            .apply(ElementKind::Edge, id, selected, exists);
        if let Some(edge) = self.graph.edge_mut(id) {
            edge.selected = selected;
        }
        changed
    }

    /// Removes every selected node (with its edges) and every selected edge, then recomputes
    /// the status once.
    pub fn remove_selected(&mut self) -> Removal {
        let selection = self.selection.take();
        let mut removal = Removal::default();
        for id in &selection.nodes {
            if let Some(detached) = self.detach_node(id) {
                removal.nodes.extend(detached.nodes);
                removal.edges.extend(detached.edges);
            }
        }
        for id in &selection.edges {
            // Already gone when it touched a selected node.
            if let Some(edge) = self.detach_edge(id) {
                removal.edges.push(edge);
            }
        }
        debug!(
            nodes = removal.nodes.len(),
            edges = removal.edges.len(),
            "selection deleted"
        );
        self.recompute_status();
        removal
    }

    // ---- change batches ----

    /// Applies host node changes in order. The status is recomputed once, at the end, when at
    /// least one node was removed.
    pub fn apply_node_changes(&mut self, changes: &[NodeChange]) {
        let mut structural = false;
        for change in changes {
            match change {
                NodeChange::Select { id, selected } => {
                    self.select_node(id, *selected);
                }
                NodeChange::Position {
                    id,
                    position: Some(position),
                    ..
                } => {
                    self.move_node(id, *position);
                }
                NodeChange::Position { id, position: None, .. } => {
                    trace!(id = %id, "position change without coordinates");
                }
                NodeChange::Remove { id } => {
                    structural |= self.detach_node(id).is_some();
                }
                NodeChange::Other => trace!("ignoring node change"),
            }
        }
        if structural {
            self.recompute_status();
        }
    }

    /// Applies host edge changes in order, recomputing the status once if any edge was removed.
    pub fn apply_edge_changes(&mut self, changes: &[EdgeChange]) {
        let mut structural = false;
        for change in changes {
            match change {
                EdgeChange::Select { id, selected } => {
                    self.select_edge(id, *selected);
                }
                EdgeChange::Remove { id } => {
                    structural |= self.detach_edge(id).is_some();
                }
                EdgeChange::Other => trace!("ignoring edge change"),
            }
        }
        if structural {
            self.recompute_status();
        }
    }

    // ---- bulk ----

    pub fn clear(&mut self) {
        debug!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "canvas cleared"
        );
        self.graph.clear();
        self.selection.clear();
        self.recompute_status();
    }

    /// Copies layout positions onto the listed nodes and points every node's handles along
    /// `direction`. Ids that are not in the store are skipped. Edges and status are untouched.
    pub fn apply_layout(&mut self, positions: &Positions, direction: Direction) -> usize {
        let mut applied = 0;
        for (id, position) in positions {
            if self.move_node(id, *position) {
                applied += 1;
            }
        }
        let handles = Handles::for_direction(direction);
        self.graph.for_each_node_mut(|_, node| node.handles = handles);
        debug!(applied, ?direction, "layout applied");
        applied
    }

    /// Asks `adapter` for positions and applies them. A failing adapter leaves every node where
    /// it was.
    pub fn run_layout(
        &mut self,
        adapter: &dyn LayoutAdapter,
        direction: Direction,
    ) -> Result<usize, Rejection> {
        let positions = {
            let input = LayoutInput {
                nodes: self.nodes().collect(),
                edges: self.edges().collect(),
                direction,
            };
            adapter.layout(&input)?
        };
        Ok(self.apply_layout(&positions, direction))
    }

    fn recompute_status(&mut self) {
        let status = cycle::detect(self.graph.edges().map(|e| (e.v, e.w)));
        if status != self.status {
            info!(from = %self.status, to = %status, "DAG status changed");
        }
        self.status = status;
    }
}
