use crate::LayoutGraph;
use crate::graphlib::alg;

/// Groups nodes into rank layers in the order a depth-first walk reaches them. Walks start at
/// nodes sorted by rank (ties keep insertion order), so every layer begins with the nodes that
/// hang off the topmost roots.
pub fn init_order(g: &LayoutGraph) -> Vec<Vec<String>> {
    let Some(max_rank) = g.nodes().filter_map(|(_, n)| n.rank).max() else {
        return Vec::new();
    };
    let mut layers: Vec<Vec<String>> = vec![Vec::new(); (max_rank + 1).max(0) as usize];

    let mut starts: Vec<(i32, usize, &str)> = g
        .nodes()
        .enumerate()
        .filter_map(|(ix, (id, n))| Some((n.rank?, ix, id)))
        .collect();
    starts.sort();
    let roots: Vec<&str> = starts.into_iter().map(|(_, _, id)| id).collect();

    for v in alg::preorder(g, &roots) {
        let Some(rank) = g.node(&v).and_then(|n| n.rank) else {
            continue;
        };
        if let Some(layer) = layers.get_mut(rank.max(0) as usize) {
            layer.push(v);
        }
    }
    layers
}
