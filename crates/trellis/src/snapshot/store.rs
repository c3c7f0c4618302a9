//! Snapshot file loading and saving.
//!
//! Errors here carry the offending path; the caller decides how to report
//! them. Loading distinguishes three failure modes: the file cannot be
//! read ([`SnapshotError::Io`]), the content is not JSON
//! ([`SnapshotError::Decode`]), and the JSON is not an object
//! ([`SnapshotError::Validation`]).

use std::fs;
use std::path::Path;

use log::debug;
use serde::Serialize;
use serde_json::Value;

use trellis_core::snapshot::ConfigMapping;

use super::{SnapshotError, to_pretty_json};

/// Loads a snapshot from a JSON file.
///
/// # Errors
///
/// See the module docs for the three failure modes.
pub fn load(path: impl AsRef<Path>) -> Result<ConfigMapping, SnapshotError> {
    let path = path.as_ref();

    let text = fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&text).map_err(|source| SnapshotError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let Value::Object(object) = value else {
        return Err(SnapshotError::Validation {
            path: path.to_path_buf(),
        });
    };

    debug!(path = path.display().to_string(), keys = object.len(); "Snapshot loaded");
    Ok(object.into_iter().collect())
}

/// Saves any JSON-serializable artifact (snapshot, delta, metadata) to a
/// file, 4-space indented, non-ASCII preserved.
///
/// # Errors
///
/// [`SnapshotError::Encode`] if the value cannot be encoded,
/// [`SnapshotError::Io`] if the file cannot be written.
pub fn save<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<(), SnapshotError> {
    let path = path.as_ref();

    let text = to_pretty_json(value).map_err(|source| SnapshotError::Encode {
        path: path.to_path_buf(),
        source,
    })?;

    fs::write(path, text).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = path.display().to_string(); "Snapshot saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn load_keeps_file_key_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"zeta": 1, "alpha": "two", "mid": 3.5}"#).unwrap();

        let mapping = load(&path).unwrap();
        let keys: Vec<_> = mapping.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(mapping.get("alpha"), Some(&json!("two")));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempdir().unwrap();
        let err = load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, SnapshotError::Io { .. }));
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, SnapshotError::Decode { .. }));
    }

    #[test]
    fn non_object_top_level_is_a_validation_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("array.json");
        fs::write(&path, r#"[1, 2, 3]"#).unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, SnapshotError::Validation { .. }));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.json");

        let mapping: ConfigMapping = [
            ("name".to_string(), json!("значение")),
            ("count".to_string(), json!(3)),
        ]
        .into_iter()
        .collect();

        save(&path, &mapping).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("    \"name\""));
        assert!(text.contains("значение"));

        assert_eq!(load(&path).unwrap(), mapping);
    }
}
