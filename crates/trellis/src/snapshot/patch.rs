//! Reapplying a delta onto a base snapshot.

use trellis_core::snapshot::{ConfigMapping, Delta};

/// Applies `delta` to a copy of `original`; the input mapping is never
/// mutated.
///
/// Strict application order: deletions, then updates, then additions.
/// Absent keys in `deletions` are ignored; `updates` and `additions`
/// insert-or-overwrite. A key appearing in both `deletions` and
/// `additions` therefore ends up present, and a key in both `updates` and
/// `additions` ends up with the addition's value. Total function over any
/// well-formed delta, including hand-built ones.
pub fn apply(original: &ConfigMapping, delta: &Delta) -> ConfigMapping {
    let mut result = original.clone();

    for key in &delta.deletions {
        // shift_remove keeps the remaining keys in their original order.
        result.shift_remove(key);
    }

    for update in &delta.updates {
        result.insert(update.key.clone(), update.to.clone());
    }

    for addition in &delta.additions {
        result.insert(addition.key.clone(), addition.value.clone());
    }

    result
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::{Value, json};

    use trellis_core::snapshot::{Addition, Update};

    use super::super::diff;
    use super::*;

    fn mapping(pairs: &[(&str, Value)]) -> ConfigMapping {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn identity_delta_is_a_no_op() {
        let original = mapping(&[("a", json!(1)), ("b", json!("x"))]);
        assert_eq!(apply(&original, &Delta::default()), original);
    }

    #[test]
    fn original_is_not_mutated() {
        let original = mapping(&[("a", json!(1))]);
        let delta = Delta {
            additions: vec![],
            deletions: vec!["a".to_string()],
            updates: vec![],
        };

        let result = apply(&original, &delta);
        assert!(result.is_empty());
        assert_eq!(original.get("a"), Some(&json!(1)));
    }

    #[test]
    fn deleting_an_absent_key_is_ignored() {
        let original = mapping(&[("a", json!(1))]);
        let delta = Delta {
            additions: vec![],
            deletions: vec!["missing".to_string()],
            updates: vec![],
        };

        assert_eq!(apply(&original, &delta), original);
    }

    #[test]
    fn addition_wins_over_deletion_of_the_same_key() {
        let original = mapping(&[("a", json!(1))]);
        let delta = Delta {
            additions: vec![Addition {
                key: "a".to_string(),
                value: json!(99),
            }],
            deletions: vec!["a".to_string()],
            updates: vec![],
        };

        assert_eq!(apply(&original, &delta), mapping(&[("a", json!(99))]));
    }

    #[test]
    fn addition_wins_over_update_of_the_same_key() {
        let original = mapping(&[("a", json!(1))]);
        let delta = Delta {
            additions: vec![Addition {
                key: "a".to_string(),
                value: json!("added"),
            }],
            deletions: vec![],
            updates: vec![Update {
                key: "a".to_string(),
                from: json!(1),
                to: json!("updated"),
            }],
        };

        let result = apply(&original, &delta);
        assert_eq!(result.get("a"), Some(&json!("added")));
    }

    #[test]
    fn hand_built_update_for_an_absent_key_inserts_it() {
        let original = mapping(&[]);
        let delta = Delta {
            additions: vec![],
            deletions: vec![],
            updates: vec![Update {
                key: "new".to_string(),
                from: json!(null),
                to: json!(7),
            }],
        };

        assert_eq!(apply(&original, &delta).get("new"), Some(&json!(7)));
    }

    fn flat_mapping() -> impl Strategy<Value = ConfigMapping> {
        prop::collection::btree_map("[a-e][0-9]?", "[x-z]{0,3}", 0..8).prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(key, value)| (key, Value::String(value)))
                .collect()
        })
    }

    proptest! {
        #[test]
        fn diff_then_apply_reproduces_the_patched_snapshot(
            original in flat_mapping(),
            patched in flat_mapping(),
        ) {
            let delta = diff(&original, &patched);
            // Mapping equality ignores insertion order.
            prop_assert_eq!(apply(&original, &delta), patched);
        }

        #[test]
        fn diff_of_a_snapshot_with_itself_is_empty(snapshot in flat_mapping()) {
            prop_assert!(diff(&snapshot, &snapshot).is_empty());
        }
    }
}
