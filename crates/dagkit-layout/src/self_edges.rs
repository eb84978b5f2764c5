//! Self edges carry no ranking information, and the rank/order phases assume they are absent.
//! They are detached before layout and reattached afterwards.

use crate::graphlib::Result;
use crate::{EdgeLabel, LayoutGraph};

#[derive(Debug, Clone, PartialEq)]
pub struct SelfEdge {
    pub id: String,
    pub v: String,
    pub label: EdgeLabel,
}

pub fn remove(g: &mut LayoutGraph) -> Vec<SelfEdge> {
    let ids: Vec<(String, String)> = g
        .edges()
        .filter(|e| e.v == e.w)
        .map(|e| (e.id.to_string(), e.v.to_string()))
        .collect();

    let mut out = Vec::with_capacity(ids.len());
    for (id, v) in ids {
        if let Some(label) = g.remove_edge(&id) {
            out.push(SelfEdge { id, v, label });
        }
    }
    out
}

pub fn restore(g: &mut LayoutGraph, edges: Vec<SelfEdge>) -> Result<()> {
    for SelfEdge { id, v, label } in edges {
        g.set_edge(id, v.clone(), v, label)?;
    }
    Ok(())
}
