//! Structural difference between two snapshots.

use trellis_core::snapshot::{Addition, ConfigMapping, Delta, Update};

/// Computes the delta that turns `original` into `patched`.
///
/// - `additions`: keys only in `patched`, in `patched`'s iteration order.
/// - `deletions`: keys only in `original`, in `original`'s iteration order.
/// - `updates`: shared keys whose values differ (JSON value equality), in
///   `original`'s iteration order.
///
/// Equal-valued shared keys produce no entry anywhere. Total function; no
/// error conditions.
pub fn diff(original: &ConfigMapping, patched: &ConfigMapping) -> Delta {
    let additions = patched
        .iter()
        .filter(|(key, _)| !original.contains_key(*key))
        .map(|(key, value)| Addition {
            key: key.clone(),
            value: value.clone(),
        })
        .collect();

    let deletions = original
        .keys()
        .filter(|key| !patched.contains_key(*key))
        .cloned()
        .collect();

    let updates = original
        .iter()
        .filter_map(|(key, from)| {
            let to = patched.get(key)?;
            (to != from).then(|| Update {
                key: key.clone(),
                from: from.clone(),
                to: to.clone(),
            })
        })
        .collect();

    Delta {
        additions,
        deletions,
        updates,
    }
}
