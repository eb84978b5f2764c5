//! Transient user-visible messages (toasts).

use serde::Serialize;

use crate::error::Rejection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    /// The notice shown for `rejection`, or `None` when the rejection is silent.
    pub fn for_rejection(rejection: &Rejection) -> Option<Self> {
        let severity = match rejection {
            Rejection::EmptyLabel => return None,
            Rejection::SelfLoopRejected { .. }
            | Rejection::UnknownNode { .. }
            | Rejection::Conflict(_) => Severity::Warning,
            Rejection::NoSelectionForDelete | Rejection::LayoutFailed(_) => Severity::Error,
        };
        Some(Self {
            severity,
            message: rejection.to_string(),
        })
    }
}
