//! Gatekeeper for new edges.

use serde::{Deserialize, Serialize};

use crate::error::Rejection;
use crate::model::EdgeId;
use crate::store::GraphStore;

/// A request to draw an edge from `source` to `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub source: String,
    pub target: String,
}

impl Connection {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Checks `connection` against the current store without mutating it.
pub fn validate(store: &GraphStore, connection: &Connection) -> Result<(), Rejection> {
    if connection.source == connection.target {
        return Err(Rejection::SelfLoopRejected {
            id: connection.source.clone(),
        });
    }
    for endpoint in [&connection.source, &connection.target] {
        if !store.has_node(endpoint) {
            return Err(Rejection::UnknownNode {
                id: endpoint.clone(),
            });
        }
    }
    Ok(())
}

/// Validates `connection` and, when it passes, inserts the edge.
pub fn connect(store: &mut GraphStore, connection: &Connection) -> Result<EdgeId, Rejection> {
    validate(store, connection)?;
    store.insert_edge(&connection.source, &connection.target)
}
