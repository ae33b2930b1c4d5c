//! Component instance identifiers
//!
//! An id is minted once, when `addComponent` places an instance into a
//! document, and travels with the instance through reorders, saves and
//! reloads. Ids of deleted instances are never handed out again.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Identity of one component instance within (and across) template documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(Uuid);

impl ComponentId {
    /// Mint an id for a newly placed instance
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ComponentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ids arrive from the presentation layer as strings (drag payloads, click targets)
impl FromStr for ComponentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_parses_its_own_display_form() {
        let id = ComponentId::new();
        assert_eq!(id.to_string().parse::<ComponentId>().unwrap(), id);
        assert!("component-1".parse::<ComponentId>().is_err());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let id = ComponentId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }

    #[test]
    fn test_fresh_ids_do_not_repeat() {
        let ids: HashSet<ComponentId> = (0..1000).map(|_| ComponentId::new()).collect();
        assert_eq!(ids.len(), 1000);
    }
}
