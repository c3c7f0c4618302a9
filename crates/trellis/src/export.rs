//! Output artifacts derived from a model graph.
//!
//! Two independent renderings of the same graph:
//!
//! - [`xml`] - the nested hierarchy rooted at the model's root class
//! - [`meta`] - the ordered metadata projection of selected classes
//!
//! Both walk a read-only [`trellis_core::model::ModelGraph`] and perform no
//! I/O.

pub mod meta;
pub mod xml;

use thiserror::Error;

/// Errors produced while rendering the hierarchy.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The requested root class is not present in the graph's class
    /// registry. This mirrors the builder's validation but is enforced here
    /// independently, since a graph need not come from the builder.
    #[error("root class `{0}` is not present in the model")]
    MissingRootClass(String),

    /// The aggregation edges form a cycle; `{0}` is the class revisited on
    /// the current traversal path.
    #[error("aggregation cycle detected at class `{0}`")]
    CyclicModel(String),
}
