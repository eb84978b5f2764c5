//! Break cycles by reversing a feedback arc set (FAS).
//!
//! The arc set comes from a depth-first search: every edge that points back to a node on the
//! current DFS path is reversed. `undo` flips those edges back once coordinates are assigned.

use crate::LayoutGraph;
use crate::graphlib::{GraphError, Result};

/// Reverses every edge of a feedback arc set. Fails without touching the graph when a reversal
/// would create a parallel edge in a graph that is not a multigraph.
pub fn run(g: &mut LayoutGraph) -> Result<()> {
    let fas = dfs_fas(g);
    for id in &fas {
        check_reversible(g, id)?;
    }
    for id in &fas {
        reverse(g, id, true)?;
    }
    Ok(())
}

pub fn undo(g: &mut LayoutGraph) -> Result<()> {
    let reversed: Vec<String> = g
        .edges()
        .filter(|e| e.label.reversed)
        .map(|e| e.id.to_string())
        .collect();
    for id in &reversed {
        reverse(g, id, false)?;
    }
    Ok(())
}

fn check_reversible(g: &LayoutGraph, id: &str) -> Result<()> {
    let Some((v, w)) = g.edge_endpoints(id) else {
        return Ok(());
    };
    if !g.options().multigraph && g.has_edge_between(w, v) {
        return Err(GraphError::ParallelEdge {
            v: w.to_string(),
            w: v.to_string(),
        });
    }
    Ok(())
}

fn reverse(g: &mut LayoutGraph, id: &str, reversed: bool) -> Result<()> {
    let Some((v, w)) = g
        .edge_endpoints(id)
        .map(|(v, w)| (v.to_string(), w.to_string()))
    else {
        return Ok(());
    };
    let Some(mut label) = g.remove_edge(id) else {
        return Ok(());
    };
    label.reversed = reversed;
    g.set_edge(id, w, v, label)
}

/// Edge ids whose reversal makes the graph acyclic. Nodes are visited in insertion order.
///
/// The walk keeps `(node, out edges, next edge)` frames on the heap, so a long chain does not
/// grow the call stack.
pub fn dfs_fas(g: &LayoutGraph) -> Vec<String> {
    let mut fas: Vec<String> = Vec::new();
    let mut visited: Vec<bool> = vec![false; g.node_count()];
    let mut on_stack: Vec<bool> = vec![false; g.node_count()];
    let mut stack: Vec<(usize, Vec<(String, usize)>, usize)> = Vec::new();
    let ids: Vec<&str> = g.node_ids().collect();

    // Out edges as `(edge id, target index)`, self-loops dropped.
    let out_of = |v: usize| -> Vec<(String, usize)> {
        g.out_edges(ids[v])
            .into_iter()
            .filter(|e| e.v != e.w)
            .filter_map(|e| Some((e.id.to_string(), g.node_ix(e.w)?)))
            .collect()
    };

    for root in 0..ids.len() {
        if visited[root] {
            continue;
        }
        visited[root] = true;
        on_stack[root] = true;
        stack.push((root, out_of(root), 0));

        while let Some((v, edges, next)) = stack.last_mut() {
            let Some((id, w)) = edges.get(*next) else {
                on_stack[*v] = false;
                stack.pop();
                continue;
            };
            *next += 1;
            let w = *w;
            if on_stack[w] {
                fas.push(id.clone());
            } else if !visited[w] {
                visited[w] = true;
                on_stack[w] = true;
                stack.push((w, out_of(w), 0));
            }
        }
    }
    fas
}
