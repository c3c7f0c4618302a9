//! Error types for Trellis operations.
//!
//! This module provides the main error type [`TrellisError`] which wraps
//! the error conditions that can occur while processing a model or a pair
//! of configuration snapshots.

use std::io;

use thiserror::Error;

use trellis_parser::ParseError;

use crate::export::ExportError;
use crate::snapshot::SnapshotError;

/// The main error type for Trellis operations.
///
/// Each variant carries the underlying typed error; nothing is swallowed or
/// retried. Callers (the CLI) are responsible for logging and mapping these
/// to a process exit code.
#[derive(Debug, Error)]
pub enum TrellisError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("model error: {0}")]
    Parse(#[from] ParseError),

    #[error("export error: {0}")]
    Export(#[from] ExportError),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}
