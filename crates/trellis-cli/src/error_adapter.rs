//! Error adapter for converting TrellisError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI. Trellis
//! errors carry paths and class names rather than source spans, so the
//! adapter contributes an error code and help text per variant instead of
//! labeled snippets.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use trellis::{ParseError, TrellisError, export::ExportError, snapshot::SnapshotError};

/// Adapter wrapping a [`TrellisError`] for miette rendering.
pub struct ErrorAdapter<'a> {
    /// The wrapped error
    err: &'a TrellisError,
}

/// Wrap an error for rendering with a [`miette::GraphicalReportHandler`].
pub fn to_reportable(err: &TrellisError) -> ErrorAdapter<'_> {
    ErrorAdapter { err }
}

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorAdapter").field("err", &self.err).finish()
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.err)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.err {
            TrellisError::Io(_) => "trellis::io",
            TrellisError::Parse(ParseError::MalformedInput(_)) => "model::malformed_input",
            TrellisError::Parse(ParseError::MissingRootClass) => "model::missing_root_class",
            TrellisError::Export(ExportError::MissingRootClass(_)) => "export::missing_root_class",
            TrellisError::Export(ExportError::CyclicModel(_)) => "export::cyclic_model",
            TrellisError::Snapshot(SnapshotError::Io { .. }) => "snapshot::io",
            TrellisError::Snapshot(SnapshotError::Decode { .. }) => "snapshot::decode",
            TrellisError::Snapshot(SnapshotError::Validation { .. }) => "snapshot::validation",
            TrellisError::Snapshot(SnapshotError::Encode { .. }) => "snapshot::encode",
            TrellisError::Json(_) => "trellis::json",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.err {
            TrellisError::Parse(ParseError::MalformedInput(_)) => {
                "check that the model file is well-formed XML"
            }
            TrellisError::Parse(ParseError::MissingRootClass) => {
                "flag exactly one Class element with isRoot=\"true\""
            }
            TrellisError::Export(ExportError::CyclicModel(_)) => {
                "remove the aggregation edge that closes the cycle"
            }
            TrellisError::Snapshot(SnapshotError::Validation { .. }) => {
                "a snapshot file must contain a single flat JSON object"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }
}
