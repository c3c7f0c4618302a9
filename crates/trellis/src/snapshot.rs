//! Configuration snapshot processing.
//!
//! Snapshots are flat JSON objects (string keys, scalar values). This
//! module groups the two engines that operate on them and their file I/O:
//!
//! - [`delta::diff`] - structural difference between two snapshots
//! - [`patch::apply`] - reapplying a delta onto a base snapshot
//! - [`store`] - loading and saving snapshot files
//!
//! Both engines are total functions over their inputs; only the store has
//! error conditions.

pub mod delta;
pub mod patch;
pub mod store;

pub use delta::diff;
pub use patch::apply;
pub use store::{load, save};

use std::io;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Errors produced while reading or writing snapshot files.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The file could not be read or written.
    #[error("failed to access snapshot file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file content is not valid JSON.
    #[error("snapshot file {} is not valid JSON: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The decoded JSON is not an object.
    #[error("snapshot file {} must contain a JSON object", path.display())]
    Validation { path: PathBuf },

    /// A value could not be encoded as JSON.
    #[error("failed to encode snapshot for {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Encodes a value as JSON with 4-space indentation, non-ASCII preserved.
///
/// All JSON artifacts (metadata, delta, patch result) share this layout.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;

    Ok(String::from_utf8(buf).expect("serde_json output is valid UTF-8"))
}
