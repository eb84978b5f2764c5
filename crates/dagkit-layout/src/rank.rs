//! Ranking by longest path.
//!
//! Every sink gets rank 0 and every other node sits `minlen` above its closest successor, which
//! pulls nodes as far down as their outgoing edges allow. Ranks are then normalized so the
//! smallest rank is 0. The graph must be acyclic (see [`crate::acyclic`]).

use crate::LayoutGraph;

pub fn rank(g: &mut LayoutGraph) {
    longest_path(g);
    normalize(g);
}

pub fn longest_path(g: &mut LayoutGraph) {
    let ids: Vec<&str> = g.node_ids().collect();
    // `(target, minlen)` for each out edge of node `v`.
    let out_of = |v: usize| -> Vec<(usize, i32)> {
        g.out_edges(ids[v])
            .into_iter()
            .filter_map(|e| Some((g.node_ix(e.w)?, e.label.minlen as i32)))
            .collect()
    };

    let mut ranks: Vec<Option<i32>> = vec![None; ids.len()];
    let mut entered: Vec<bool> = vec![false; ids.len()];
    let mut stack: Vec<(usize, Vec<(usize, i32)>, usize)> = Vec::new();

    for source in g.sources() {
        let Some(root) = g.node_ix(source) else {
            continue;
        };
        if entered[root] {
            continue;
        }
        entered[root] = true;
        stack.push((root, out_of(root), 0));

        while let Some((v, edges, next)) = stack.last_mut() {
            if let Some(&(w, _)) = edges.get(*next) {
                *next += 1;
                if !entered[w] {
                    entered[w] = true;
                    stack.push((w, out_of(w), 0));
                }
                continue;
            }

            // Every successor is ranked by now; one that is still entered but unranked sits on
            // a cycle and is skipped.
            let rank = edges
                .iter()
                .filter_map(|&(w, minlen)| Some(ranks[w]? - minlen))
                .min()
                .unwrap_or(0);
            ranks[*v] = Some(rank);
            stack.pop();
        }
    }

    // Nodes unreachable from a source only exist when the graph still has a cycle; they stay
    // on rank 0.
    let mut ranks = ranks.into_iter();
    g.for_each_node_mut(|_, n| {
        n.rank = Some(ranks.next().flatten().unwrap_or(0));
    });
}

pub fn normalize(g: &mut LayoutGraph) {
    let min = g.nodes().filter_map(|(_, n)| n.rank).min().unwrap_or(0);
    g.for_each_node_mut(|_, n| {
        if let Some(rank) = n.rank.as_mut() {
            *rank -= min;
        }
    });
}

/// `w.rank - v.rank - minlen` for the edge `id`; zero means the edge is tight.
pub fn slack(g: &LayoutGraph, id: &str) -> i32 {
    let Some((v, w)) = g.edge_endpoints(id) else {
        return 0;
    };
    let w_rank = g.node(w).and_then(|n| n.rank).unwrap_or(0);
    let v_rank = g.node(v).and_then(|n| n.rank).unwrap_or(0);
    let minlen = g.edge(id).map(|e| e.minlen as i32).unwrap_or(1);
    w_rank - v_rank - minlen
}
