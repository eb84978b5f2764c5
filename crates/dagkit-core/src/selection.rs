//! Selected node and edge ids, in the order they were selected.

use indexmap::IndexSet;

use crate::model::ElementKind;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    nodes: IndexSet<String>,
    edges: IndexSet<String>,
}

/// Everything that was selected at the moment of a [`SelectionTracker::take`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub nodes: Vec<String>,
    pub edges: Vec<String>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a selection change. `exists` tells whether the element is still in the graph;
    /// events for missing elements are ignored. Returns `true` if the set changed.
    pub fn apply(&mut self, kind: ElementKind, id: &str, selected: bool, exists: bool) -> bool {
        if !exists {
            return false;
        }
        let set = match kind {
            ElementKind::Node => &mut self.nodes,
            ElementKind::Edge => &mut self.edges,
        };
        if selected {
            set.insert(id.to_string())
        } else {
            set.shift_remove(id)
        }
    }

    pub fn forget_node(&mut self, id: &str) -> bool {
        self.nodes.shift_remove(id)
    }

    pub fn forget_edge(&mut self, id: &str) -> bool {
        self.edges.shift_remove(id)
    }

    pub fn is_node_selected(&self, id: &str) -> bool {
        self.nodes.contains(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    pub fn edges(&self) -> impl Iterator<Item = &str> {
        self.edges.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Empties both sets and returns what they held.
    pub fn take(&mut self) -> Selection {
        Selection {
            nodes: std::mem::take(&mut self.nodes).into_iter().collect(),
            edges: std::mem::take(&mut self.edges).into_iter().collect(),
        }
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }
}
