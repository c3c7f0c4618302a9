//! Error types for model parsing.

use thiserror::Error;

/// Errors produced while building a model graph from XML markup.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The input is not well-formed XML. The wrapped error carries the
    /// offending position in the source text.
    #[error("malformed model markup: {0}")]
    MalformedInput(#[from] roxmltree::Error),

    /// No class in the model is flagged as root.
    #[error("model has no root class (no Class element with isRoot=\"true\")")]
    MissingRootClass,
}
