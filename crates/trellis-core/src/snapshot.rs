//! Configuration snapshots and their deltas.
//!
//! A snapshot is a flat, insertion-ordered mapping from string keys to JSON
//! scalar values. Two snapshots can be compared into a [`Delta`], and a
//! delta can be applied back onto a snapshot; both operations live in the
//! `trellis` crate, this module only defines the value types and their
//! JSON wire shape.
//!
//! Insertion order is not significant for equality but determines the
//! layout of written files, so snapshots use [`IndexMap`] rather than a
//! hashed map.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A flat configuration snapshot.
pub type ConfigMapping = IndexMap<String, Value>;

/// A key added by a delta, with its new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Addition {
    pub key: String,
    pub value: Value,
}

/// A key whose value changed between two snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub key: String,
    pub from: Value,
    pub to: Value,
}

/// The structural difference between two snapshots.
///
/// Sequences keep the order in which the diff discovered them: `additions`
/// follow the patched snapshot's iteration order, `deletions` and `updates`
/// follow the original's. A `Delta` is honored by the patch engine whether
/// it was produced by the diff engine or built by hand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Delta {
    pub additions: Vec<Addition>,
    pub deletions: Vec<String>,
    pub updates: Vec<Update>,
}

impl Delta {
    /// Whether this delta changes nothing.
    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.deletions.is_empty() && self.updates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn delta_serializes_with_wire_field_names() {
        let delta = Delta {
            additions: vec![Addition {
                key: "a".to_string(),
                value: json!(1),
            }],
            deletions: vec!["b".to_string()],
            updates: vec![Update {
                key: "c".to_string(),
                from: json!("x"),
                to: json!("y"),
            }],
        };

        let encoded = serde_json::to_value(&delta).unwrap();
        assert_eq!(
            encoded,
            json!({
                "additions": [{"key": "a", "value": 1}],
                "deletions": ["b"],
                "updates": [{"key": "c", "from": "x", "to": "y"}],
            })
        );
    }

    #[test]
    fn empty_delta_reports_empty() {
        assert!(Delta::default().is_empty());
    }
}
