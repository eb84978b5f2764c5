//! Adjacency cache used by [`Graph`](super::Graph).
//!
//! Traversals query out/in edges once per visited node; scanning every edge each time would be
//! O(E) per query. The cache is rebuilt lazily after structural edits.

#[derive(Debug, Clone)]
pub(in crate::graph) struct AdjCache {
    pub(in crate::graph) generation: u64,
    pub(in crate::graph) out_offsets: Vec<usize>,
    pub(in crate::graph) out_edges: Vec<usize>,
    pub(in crate::graph) in_offsets: Vec<usize>,
    pub(in crate::graph) in_edges: Vec<usize>,
}

impl AdjCache {
    /// Builds compressed out/in edge lists from `(v_ix, w_ix)` endpoint pairs, indexed by edge
    /// position.
    pub(in crate::graph) fn build(
        generation: u64,
        node_count: usize,
        endpoints: &[(usize, usize)],
    ) -> Self {
        let mut out_offsets = vec![0usize; node_count + 1];
        let mut in_offsets = vec![0usize; node_count + 1];
        for &(v_ix, w_ix) in endpoints {
            out_offsets[v_ix + 1] += 1;
            in_offsets[w_ix + 1] += 1;
        }
        for i in 0..node_count {
            out_offsets[i + 1] += out_offsets[i];
            in_offsets[i + 1] += in_offsets[i];
        }

        let mut out_edges = vec![0usize; endpoints.len()];
        let mut in_edges = vec![0usize; endpoints.len()];
        let mut out_cursor = out_offsets.clone();
        let mut in_cursor = in_offsets.clone();
        for (edge_ix, &(v_ix, w_ix)) in endpoints.iter().enumerate() {
            out_edges[out_cursor[v_ix]] = edge_ix;
            out_cursor[v_ix] += 1;
            in_edges[in_cursor[w_ix]] = edge_ix;
            in_cursor[w_ix] += 1;
        }

        Self {
            generation,
            out_offsets,
            out_edges,
            in_offsets,
            in_edges,
        }
    }

    pub(in crate::graph) fn out_edges(&self, v_ix: usize) -> &[usize] {
        let start = self.out_offsets[v_ix];
        let end = self.out_offsets[v_ix + 1];
        &self.out_edges[start..end]
    }

    pub(in crate::graph) fn in_edges(&self, v_ix: usize) -> &[usize] {
        let start = self.in_offsets[v_ix];
        let end = self.in_offsets[v_ix + 1];
        &self.in_edges[start..end]
    }
}
