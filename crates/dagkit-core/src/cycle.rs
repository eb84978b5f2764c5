//! Acyclicity check over an edge list.
//!
//! Depth-first search from every source that has not been visited yet. `visited` holds nodes
//! whose reachable subgraph is fully explored, `on_stack` the nodes on the active path; an edge
//! into `on_stack` is a back edge and proves a cycle. The walk uses an explicit stack of
//! `(node, next child)` frames instead of recursion, so depth is bounded by heap, not call stack.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DagStatus {
    #[default]
    Valid,
    Cyclic,
}

impl DagStatus {
    pub fn is_valid(self) -> bool {
        matches!(self, DagStatus::Valid)
    }

    /// User-facing status line.
    pub fn label(self) -> &'static str {
        match self {
            DagStatus::Valid => "✅ DAG is valid",
            DagStatus::Cyclic => "❌ Invalid DAG: Cycle detected",
        }
    }
}

impl fmt::Display for DagStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies the directed graph induced by `edges` (pairs of `(source, target)`).
///
/// Nodes that never appear as a source cannot start a cycle, so isolated nodes and sinks need
/// not be passed in. Runs in O(V + E).
pub fn detect<'a, I>(edges: I) -> DagStatus
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut adj: FxHashMap<&'a str, Vec<&'a str>> = FxHashMap::default();
    let mut roots: Vec<&'a str> = Vec::new();
    for (v, w) in edges {
        adj.entry(v)
            .or_insert_with(|| {
                roots.push(v);
                Vec::new()
            })
            .push(w);
    }

    let mut visited: FxHashSet<&'a str> = FxHashSet::default();
    let mut on_stack: FxHashSet<&'a str> = FxHashSet::default();
    let mut stack: Vec<(&'a str, usize)> = Vec::new();

    for root in roots {
        if !visited.insert(root) {
            continue;
        }
        on_stack.insert(root);
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (v, next) = *frame;
            frame.1 += 1;
            match adj.get(v).and_then(|children| children.get(next)) {
                Some(&w) => {
                    if on_stack.contains(w) {
                        return DagStatus::Cyclic;
                    }
                    if visited.insert(w) {
                        on_stack.insert(w);
                        stack.push((w, 0));
                    }
                }
                None => {
                    on_stack.remove(v);
                    stack.pop();
                }
            }
        }
    }

    DagStatus::Valid
}
