//! Node ordering / crossing minimization.
//!
//! An initial order comes from a depth-first walk; then alternating down and up sweeps reorder
//! each rank by the barycenter of its neighbours' positions. After every sweep the number of
//! crossings between adjacent ranks is counted and the best layering seen so far is kept.

mod barycenter;
mod cross_count;
mod init_order;

pub use barycenter::{BarycenterEntry, barycenter, sort_layer};
pub use cross_count::cross_count;
pub use init_order::init_order;

use crate::LayoutGraph;
use rustc_hash::FxHashMap as HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sweep {
    /// Fix rank `r - 1`, reorder rank `r` by predecessors.
    Down,
    /// Fix rank `r + 1`, reorder rank `r` by successors.
    Up,
}

pub fn order(g: &mut LayoutGraph, iterations: usize) {
    let mut layering = init_order(g);
    let mut best = layering.clone();
    let mut best_cc = cross_count(g, &layering);

    for i in 0..iterations {
        if best_cc == 0.0 {
            break;
        }
        let sweep = if i % 2 == 0 { Sweep::Down } else { Sweep::Up };
        sweep_layering(g, &mut layering, sweep);

        let cc = cross_count(g, &layering);
        if cc < best_cc {
            best_cc = cc;
            best = layering.clone();
        }
    }

    assign_order(g, &best);
}

pub fn sweep_layering(g: &LayoutGraph, layering: &mut [Vec<String>], sweep: Sweep) {
    let ranks: Vec<usize> = match sweep {
        Sweep::Down => (1..layering.len()).collect(),
        Sweep::Up => (0..layering.len().saturating_sub(1)).rev().collect(),
    };

    let mut positions = positions_of(layering);
    for r in ranks {
        let entries: Vec<BarycenterEntry> = layering[r]
            .iter()
            .map(|v| barycenter(g, v, sweep, &positions))
            .collect();
        layering[r] = sort_layer(entries);
        for (i, v) in layering[r].iter().enumerate() {
            if let Some(pos) = positions.get_mut(v) {
                *pos = i;
            }
        }
    }
}

fn positions_of(layering: &[Vec<String>]) -> HashMap<String, usize> {
    let mut out: HashMap<String, usize> = HashMap::default();
    for layer in layering {
        for (i, v) in layer.iter().enumerate() {
            out.insert(v.clone(), i);
        }
    }
    out
}

pub fn assign_order(g: &mut LayoutGraph, layering: &[Vec<String>]) {
    for layer in layering {
        for (i, v) in layer.iter().enumerate() {
            if let Some(n) = g.node_mut(v) {
                n.order = Some(i);
            }
        }
    }
}
