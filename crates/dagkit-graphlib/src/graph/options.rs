//! Graph configuration options.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphOptions {
    /// Allow more than one edge between the same ordered pair of nodes.
    pub multigraph: bool,
    /// Allow edges whose source and target are the same node.
    pub self_loops: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            multigraph: true,
            self_loops: true,
        }
    }
}
