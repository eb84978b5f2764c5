//! Event dispatcher between a host UI loop and the graph core.
//!
//! A host feeds one [`Event`] at a time into [`Canvas::dispatch`]. Rejections are turned into
//! [`Notice`]s, and a finished layout queues a [`ViewportRequest`] for the host's next tick.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::changes::{EdgeChange, NodeChange};
use crate::config::CanvasConfig;
use crate::connect::{self, Connection};
use crate::cycle::DagStatus;
use crate::error::Rejection;
use crate::layout::{Direction, LayoutAdapter, NoopLayout, ViewportRequest};
use crate::model::{Edge, Node};
use crate::notice::Notice;
use crate::store::GraphStore;

/// Key that deletes the whole selection.
pub const DELETE_KEY: &str = "Delete";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Event {
    NodesChange {
        changes: Vec<NodeChange>,
    },
    EdgesChange {
        changes: Vec<EdgeChange>,
    },
    Connect {
        source: String,
        target: String,
    },
    /// A missing label behaves like a dismissed prompt.
    AddNode {
        #[serde(default)]
        label: Option<String>,
    },
    /// Delete the first selected node.
    DeleteNode,
    ClearCanvas,
    RunLayout {
        #[serde(default)]
        direction: Direction,
    },
    Key {
        key: String,
    },
}

/// Serializable view of the canvas state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub status: DagStatus,
    pub label: &'static str,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub selected_nodes: Vec<String>,
    pub selected_edges: Vec<String>,
}

pub struct Canvas {
    store: GraphStore,
    layout: Box<dyn LayoutAdapter>,
    config: CanvasConfig,
    notices: Vec<Notice>,
    deferred: VecDeque<ViewportRequest>,
}

impl std::fmt::Debug for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("store", &self.store)
            .field("config", &self.config)
            .field("notices", &self.notices)
            .field("deferred", &self.deferred)
            .finish_non_exhaustive()
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(CanvasConfig::default(), Box::new(NoopLayout))
    }
}

impl Canvas {
    pub fn new(config: CanvasConfig, layout: Box<dyn LayoutAdapter>) -> Self {
        Self {
            store: GraphStore::with_config(&config),
            layout,
            config,
            notices: Vec::new(),
            deferred: VecDeque::new(),
        }
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn status(&self) -> DagStatus {
        self.store.status()
    }

    /// Handles one event. A rejected event leaves the graph untouched and records a notice
    /// unless the rejection is silent.
    pub fn dispatch(&mut self, event: Event) -> Result<(), Rejection> {
        let result = self.handle(event);
        if let Err(rejection) = &result {
            debug!(%rejection, "event rejected");
            if let Some(notice) = Notice::for_rejection(rejection) {
                self.notices.push(notice);
            }
        }
        result
    }

    fn handle(&mut self, event: Event) -> Result<(), Rejection> {
        match event {
            Event::NodesChange { changes } => self.store.apply_node_changes(&changes),
            Event::EdgesChange { changes } => self.store.apply_edge_changes(&changes),
            Event::Connect { source, target } => {
                connect::connect(&mut self.store, &Connection { source, target })?;
            }
            Event::AddNode { label } => {
                self.store.add_node(label.as_deref().unwrap_or_default())?;
            }
            Event::DeleteNode => self.delete_first_selected()?,
            Event::ClearCanvas => self.store.clear(),
            Event::RunLayout { direction } => self.run_layout(direction)?,
            Event::Key { key } if key == DELETE_KEY => {
                self.store.remove_selected();
            }
            Event::Key { key } => trace!(key = %key, "ignoring key"),
        }
        Ok(())
    }

    fn delete_first_selected(&mut self) -> Result<(), Rejection> {
        let id = self
            .store
            .first_selected_node()
            .map(str::to_string)
            .ok_or(Rejection::NoSelectionForDelete)?;
        self.store.remove_node(&id);
        Ok(())
    }

    /// Lays the graph out along `direction` and queues a viewport refit.
    pub fn run_layout(&mut self, direction: Direction) -> Result<(), Rejection> {
        self.store.run_layout(self.layout.as_ref(), direction)?;
        self.deferred.push_back(self.config.fit_view.request());
        Ok(())
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Viewport requests queued since the last drain, oldest first.
    pub fn drain_deferred(&mut self) -> Vec<ViewportRequest> {
        self.deferred.drain(..).collect()
    }

    pub fn pending_deferred(&self) -> usize {
        self.deferred.len()
    }

    pub fn snapshot(&self) -> Snapshot {
        let status = self.store.status();
        Snapshot {
            status,
            label: status.label(),
            nodes: self.store.nodes().cloned().collect(),
            edges: self.store.edges().cloned().collect(),
            selected_nodes: self.store.selected_nodes().map(str::to_string).collect(),
            selected_edges: self.store.selected_edges().map(str::to_string).collect(),
        }
    }
}
