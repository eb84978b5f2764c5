//! Element id generation.
//!
//! Sequential ids come from a counter that only ever grows, so an id is never handed out twice
//! even after the element that carried it has been deleted.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// `<prefix>1`, `<prefix>2`, …
    #[default]
    Sequential,
    /// Random v4 UUIDs.
    Uuid,
}

#[derive(Debug, Clone)]
pub struct IdGenerator {
    strategy: IdStrategy,
    prefix: &'static str,
    next: u64,
}

impl IdGenerator {
    pub fn new(strategy: IdStrategy, prefix: &'static str) -> Self {
        Self {
            strategy,
            prefix,
            next: 1,
        }
    }

    pub fn next_id(&mut self) -> String {
        match self.strategy {
            IdStrategy::Sequential => {
                let id = format!("{}{}", self.prefix, self.next);
                self.next += 1;
                id
            }
            IdStrategy::Uuid => uuid::Uuid::new_v4().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_never_repeat() {
        let mut ids = IdGenerator::new(IdStrategy::Sequential, "n");
        assert_eq!(ids.next_id(), "n1");
        assert_eq!(ids.next_id(), "n2");
        assert_eq!(ids.next_id(), "n3");
    }

    #[test]
    fn uuid_ids_are_distinct() {
        let mut ids = IdGenerator::new(IdStrategy::Uuid, "n");
        let a = ids.next_id();
        let b = ids.next_id();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(&a).is_ok());
    }
}
