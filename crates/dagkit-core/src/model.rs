//! Canvas data model: nodes, edges and their geometry.

use serde::{Deserialize, Serialize};

use crate::layout::Direction;

pub type NodeId = String;
pub type EdgeId = String;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

/// Which sides of a node carry its connection handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handles {
    pub source: Side,
    pub target: Side,
}

impl Default for Handles {
    fn default() -> Self {
        Self {
            source: Side::Right,
            target: Side::Left,
        }
    }
}

impl Handles {
    /// Handle sides that make edges flow along `direction`.
    pub fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::TopToBottom => Self {
                source: Side::Bottom,
                target: Side::Top,
            },
            Direction::LeftToRight => Self {
                source: Side::Right,
                target: Side::Left,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub position: Position,
    pub selected: bool,
    pub handles: Handles,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, label: impl Into<String>, position: Position) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            position,
            selected: false,
            handles: Handles::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
    pub selected: bool,
}

impl Edge {
    pub fn new(id: impl Into<EdgeId>, source: impl Into<NodeId>, target: impl Into<NodeId>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            selected: false,
        }
    }
}

/// Discriminates the two kinds of canvas element a selection event can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Node,
    Edge,
}
