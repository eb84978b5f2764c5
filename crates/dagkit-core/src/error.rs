use dagkit_graphlib::GraphError;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid config value for `{field}`: {message}")]
    InvalidConfig { field: &'static str, message: String },
}

/// Why a user action was refused. None of these leave the graph in a different state than
/// before the action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Cannot connect a node to itself!")]
    SelfLoopRejected { id: String },

    #[error("Please select a node to delete")]
    NoSelectionForDelete,

    #[error("Node label must not be empty")]
    EmptyLabel,

    #[error("Unknown node: {id}")]
    UnknownNode { id: String },

    #[error("Layout failed: {0}")]
    LayoutFailed(#[from] LayoutError),

    /// The backing graph refused an edge for a reason not covered above.
    #[error(transparent)]
    Conflict(GraphError),
}

impl From<GraphError> for Rejection {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::MissingNode { id } => Rejection::UnknownNode { id },
            GraphError::SelfLoop { id } => Rejection::SelfLoopRejected { id },
            other => Rejection::Conflict(other),
        }
    }
}

/// Error reported by a [`LayoutAdapter`](crate::layout::LayoutAdapter).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct LayoutError {
    pub message: String,
}

impl LayoutError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
