//! Coordinate assignment.
//!
//! Ranks are stacked top to bottom, each as tall as its tallest node plus `ranksep`. Inside a
//! rank nodes are packed left to right in `order`, separated by `nodesep`, and every rank is
//! centred on the widest one.

use crate::LayoutGraph;
use std::collections::BTreeMap;

pub fn position(g: &mut LayoutGraph, nodesep: f64, ranksep: f64) {
    let ranks = layers_by_rank(g);

    let mut prev_y: f64 = 0.0;
    for ids in ranks.values() {
        let max_h = ids
            .iter()
            .filter_map(|id| g.node(id))
            .map(|n| n.height)
            .fold(0.0, f64::max);
        for id in ids {
            if let Some(n) = g.node_mut(id) {
                n.y = Some(prev_y + max_h / 2.0);
            }
        }
        prev_y += max_h + ranksep;
    }

    let widths: Vec<f64> = ranks.values().map(|ids| rank_width(g, ids, nodesep)).collect();
    let widest = widths.iter().copied().fold(0.0, f64::max);

    for (ids, width) in ranks.values().zip(widths) {
        let mut x_cursor: f64 = (widest - width) / 2.0;
        for id in ids {
            let node_width = g.node(id).map(|n| n.width).unwrap_or(0.0);
            if let Some(n) = g.node_mut(id) {
                n.x = Some(x_cursor + node_width / 2.0);
            }
            x_cursor += node_width + nodesep;
        }
    }
}

/// Node ids grouped by rank, each group sorted by `order` (insertion order when unset).
pub fn layers_by_rank(g: &LayoutGraph) -> BTreeMap<i32, Vec<String>> {
    let mut ranks: BTreeMap<i32, Vec<String>> = BTreeMap::new();
    for (id, n) in g.nodes() {
        let Some(rank) = n.rank else {
            continue;
        };
        ranks.entry(rank).or_default().push(id.to_string());
    }
    for ids in ranks.values_mut() {
        ids.sort_by_key(|id| g.node(id).and_then(|n| n.order).unwrap_or(usize::MAX));
    }
    ranks
}

fn rank_width(g: &LayoutGraph, ids: &[String], nodesep: f64) -> f64 {
    let total: f64 = ids.iter().filter_map(|id| g.node(id)).map(|n| n.width).sum();
    total + nodesep * ids.len().saturating_sub(1) as f64
}
