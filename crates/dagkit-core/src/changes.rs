//! Change records emitted by the host for nodes and edges.
//!
//! Kinds the core does not act on (dimension updates, host-side add/replace) deserialize to
//! `Other` and are skipped.

use serde::{Deserialize, Serialize};

use crate::model::Position;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeChange {
    Select {
        id: String,
        selected: bool,
    },
    Position {
        id: String,
        #[serde(default)]
        position: Option<Position>,
        #[serde(default)]
        dragging: bool,
    },
    Remove {
        id: String,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EdgeChange {
    Select {
        id: String,
        selected: bool,
    },
    Remove {
        id: String,
    },
    #[serde(other)]
    Other,
}
