//! Graph container APIs used by `dagkit`.
//!
//! This module contains the core `Graph` container plus a small set of helper algorithms
//! re-exported as `dagkit_graphlib::alg`.

use rustc_hash::FxBuildHasher;
use std::cell::RefCell;

use crate::error::{GraphError, Result};

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

mod adj_cache;
pub mod alg;
mod entries;
mod options;

use adj_cache::AdjCache;
use entries::{EdgeEntry, NodeEntry};
pub use options::GraphOptions;

/// Borrowed view of one edge.
#[derive(Debug)]
pub struct EdgeRef<'a, E> {
    pub id: &'a str,
    pub v: &'a str,
    pub w: &'a str,
    pub label: &'a E,
}

impl<E> Clone for EdgeRef<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for EdgeRef<'_, E> {}

/// What `remove_node` detached from the graph: the node label plus every incident edge, in edge
/// insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedNode<N, E> {
    pub label: N,
    pub edges: Vec<(String, E)>,
}

pub struct Graph<N, E> {
    options: GraphOptions,

    nodes: Vec<NodeEntry<N>>,
    node_index: HashMap<String, usize>,

    edges: Vec<EdgeEntry<E>>,
    edge_index: HashMap<String, usize>,

    // Bumped on every structural edit; the adjacency cache is rebuilt on the next query when
    // its generation no longer matches.
    adj_gen: u64,
    adj_cache: RefCell<Option<AdjCache>>,
}

impl<N, E> Default for Graph<N, E> {
    fn default() -> Self {
        Self::new(GraphOptions::default())
    }
}

impl<N: Clone, E: Clone> Clone for Graph<N, E> {
    fn clone(&self) -> Self {
        Self {
            options: self.options,
            nodes: self.nodes.clone(),
            node_index: self.node_index.clone(),
            edges: self.edges.clone(),
            edge_index: self.edge_index.clone(),
            adj_gen: self.adj_gen,
            adj_cache: RefCell::new(None),
        }
    }
}

impl<N: std::fmt::Debug, E: std::fmt::Debug> std::fmt::Debug for Graph<N, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("options", &self.options)
            .field("nodes", &self.nodes)
            .field("edges", &self.edges)
            .finish()
    }
}

impl<N, E> Graph<N, E> {
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            nodes: Vec::new(),
            node_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
            adj_gen: 0,
            adj_cache: RefCell::new(None),
        }
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    fn invalidate_adj(&mut self) {
        self.adj_gen = self.adj_gen.wrapping_add(1);
        *self.adj_cache.get_mut() = None;
    }

    fn with_adj<R>(&self, f: impl FnOnce(&AdjCache) -> R) -> R {
        let mut slot = self.adj_cache.borrow_mut();
        if slot.as_ref().is_some_and(|c| c.generation != self.adj_gen) {
            *slot = None;
        }
        let cache = slot.get_or_insert_with(|| {
            let endpoints: Vec<(usize, usize)> = self
                .edges
                .iter()
                .filter_map(|e| Some((*self.node_index.get(&e.v)?, *self.node_index.get(&e.w)?)))
                .collect();
            AdjCache::build(self.adj_gen, self.nodes.len(), &endpoints)
        });
        f(cache)
    }

    fn edge_ref(&self, ix: usize) -> EdgeRef<'_, E> {
        let e = &self.edges[ix];
        EdgeRef {
            id: e.id.as_str(),
            v: e.v.as_str(),
            w: e.w.as_str(),
            label: &e.label,
        }
    }

    fn reindex_nodes_from(&mut self, start: usize) {
        for i in start..self.nodes.len() {
            if let Some(slot) = self.node_index.get_mut(self.nodes[i].id.as_str()) {
                *slot = i;
            }
        }
    }

    fn reindex_edges_from(&mut self, start: usize) {
        for i in start..self.edges.len() {
            if let Some(slot) = self.edge_index.get_mut(self.edges[i].id.as_str()) {
                *slot = i;
            }
        }
    }

    // ---- nodes ----

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    /// Inserts a node, or replaces the label of an existing one. Returns `true` when the node is
    /// new.
    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> bool {
        let id = id.into();
        if let Some(&idx) = self.node_index.get(&id) {
            self.nodes[idx].label = label;
            return false;
        }
        self.invalidate_adj();
        let idx = self.nodes.len();
        self.nodes.push(NodeEntry {
            id: id.clone(),
            label,
        });
        self.node_index.insert(id, idx);
        true
    }

    pub fn node(&self, id: &str) -> Option<&N> {
        self.node_index.get(id).map(|&idx| &self.nodes[idx].label)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut N> {
        self.node_index
            .get(id)
            .copied()
            .map(move |idx| &mut self.nodes[idx].label)
    }

    /// Position of `id` in node insertion order.
    pub fn node_ix(&self, id: &str) -> Option<usize> {
        self.node_index.get(id).copied()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    pub fn nodes(&self) -> impl Iterator<Item = (&str, &N)> {
        self.nodes.iter().map(|n| (n.id.as_str(), &n.label))
    }

    pub fn for_each_node_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&str, &mut N),
    {
        for n in &mut self.nodes {
            f(&n.id, &mut n.label);
        }
    }

    /// Removes a node together with every edge that starts or ends at it.
    pub fn remove_node(&mut self, id: &str) -> Option<RemovedNode<N, E>> {
        let idx = self.node_index.remove(id)?;
        self.invalidate_adj();
        let entry = self.nodes.remove(idx);
        self.reindex_nodes_from(idx);

        let mut removed: Vec<(String, E)> = Vec::new();
        let mut kept: Vec<EdgeEntry<E>> = Vec::with_capacity(self.edges.len());
        for e in std::mem::take(&mut self.edges) {
            if e.v == id || e.w == id {
                self.edge_index.remove(e.id.as_str());
                removed.push((e.id, e.label));
            } else {
                kept.push(e);
            }
        }
        self.edges = kept;
        if !removed.is_empty() {
            self.reindex_edges_from(0);
        }

        Some(RemovedNode {
            label: entry.label,
            edges: removed,
        })
    }

    pub fn sources(&self) -> Vec<&str> {
        self.with_adj(|adj| {
            self.nodes
                .iter()
                .enumerate()
                .filter(|(ix, _)| adj.in_edges(*ix).is_empty())
                .map(|(_, n)| n.id.as_str())
                .collect()
        })
    }

    pub fn sinks(&self) -> Vec<&str> {
        self.with_adj(|adj| {
            self.nodes
                .iter()
                .enumerate()
                .filter(|(ix, _)| adj.out_edges(*ix).is_empty())
                .map(|(_, n)| n.id.as_str())
                .collect()
        })
    }

    // ---- edges ----

    pub fn has_edge(&self, id: &str) -> bool {
        self.edge_index.contains_key(id)
    }

    pub fn has_edge_between(&self, v: &str, w: &str) -> bool {
        let Some(&v_ix) = self.node_index.get(v) else {
            return false;
        };
        self.with_adj(|adj| adj.out_edges(v_ix).iter().any(|&e| self.edges[e].w == w))
    }

    /// Inserts edge `id` from `v` to `w`. Both endpoints must already exist.
    pub fn set_edge(
        &mut self,
        id: impl Into<String>,
        v: impl Into<String>,
        w: impl Into<String>,
        label: E,
    ) -> Result<()> {
        let (id, v, w) = (id.into(), v.into(), w.into());
        if self.edge_index.contains_key(&id) {
            return Err(GraphError::DuplicateEdgeId { id });
        }
        for endpoint in [&v, &w] {
            if !self.node_index.contains_key(endpoint) {
                return Err(GraphError::MissingNode {
                    id: endpoint.clone(),
                });
            }
        }
        if v == w && !self.options.self_loops {
            return Err(GraphError::SelfLoop { id: v });
        }
        if !self.options.multigraph && self.has_edge_between(&v, &w) {
            return Err(GraphError::ParallelEdge { v, w });
        }

        self.invalidate_adj();
        let idx = self.edges.len();
        self.edges.push(EdgeEntry {
            id: id.clone(),
            v,
            w,
            label,
        });
        self.edge_index.insert(id, idx);
        Ok(())
    }

    pub fn edge(&self, id: &str) -> Option<&E> {
        self.edge_index.get(id).map(|&idx| &self.edges[idx].label)
    }

    pub fn edge_mut(&mut self, id: &str) -> Option<&mut E> {
        self.edge_index
            .get(id)
            .copied()
            .map(move |idx| &mut self.edges[idx].label)
    }

    pub fn edge_endpoints(&self, id: &str) -> Option<(&str, &str)> {
        let &idx = self.edge_index.get(id)?;
        let e = &self.edges[idx];
        Some((e.v.as_str(), e.w.as_str()))
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_, E>> {
        (0..self.edges.len()).map(|ix| self.edge_ref(ix))
    }

    pub fn remove_edge(&mut self, id: &str) -> Option<E> {
        let idx = self.edge_index.remove(id)?;
        self.invalidate_adj();
        let entry = self.edges.remove(idx);
        self.reindex_edges_from(idx);
        Some(entry.label)
    }

    pub fn out_edges(&self, v: &str) -> Vec<EdgeRef<'_, E>> {
        let Some(&v_ix) = self.node_index.get(v) else {
            return Vec::new();
        };
        self.with_adj(|adj| adj.out_edges(v_ix).iter().map(|&e| self.edge_ref(e)).collect())
    }

    pub fn in_edges(&self, v: &str) -> Vec<EdgeRef<'_, E>> {
        let Some(&v_ix) = self.node_index.get(v) else {
            return Vec::new();
        };
        self.with_adj(|adj| adj.in_edges(v_ix).iter().map(|&e| self.edge_ref(e)).collect())
    }

    pub fn successors(&self, v: &str) -> Vec<&str> {
        let Some(&v_ix) = self.node_index.get(v) else {
            return Vec::new();
        };
        self.with_adj(|adj| {
            adj.out_edges(v_ix)
                .iter()
                .map(|&e| self.edges[e].w.as_str())
                .collect()
        })
    }

    pub fn predecessors(&self, v: &str) -> Vec<&str> {
        let Some(&v_ix) = self.node_index.get(v) else {
            return Vec::new();
        };
        self.with_adj(|adj| {
            adj.in_edges(v_ix)
                .iter()
                .map(|&e| self.edges[e].v.as_str())
                .collect()
        })
    }

    pub fn clear(&mut self) {
        self.invalidate_adj();
        self.nodes.clear();
        self.node_index.clear();
        self.edges.clear();
        self.edge_index.clear();
    }
}
