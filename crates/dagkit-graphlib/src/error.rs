#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("node not found: {id}")]
    MissingNode { id: String },

    #[error("edge id already in use: {id}")]
    DuplicateEdgeId { id: String },

    #[error("graph is not a multigraph; an edge {v} -> {w} already exists")]
    ParallelEdge { v: String, w: String },

    #[error("self-loops are disabled for this graph: {id}")]
    SelfLoop { id: String },
}

pub type Result<T> = std::result::Result<T, GraphError>;
