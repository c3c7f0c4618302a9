//! Parser for Trellis class-model XML.
//!
//! This crate turns raw XML markup into a validated
//! [`trellis_core::model::ModelGraph`]. The input format is deliberately
//! loose: `Class` and `Aggregation` elements are recognised anywhere in the
//! document, regardless of nesting, and elements missing their required
//! attributes are skipped rather than rejected.
//!
//! # Example
//!
//! ```
//! let markup = r#"
//!     <Model>
//!         <Class name="BTS" isRoot="true">
//!             <Attribute name="id" type="uint32"/>
//!         </Class>
//!         <Class name="RU">
//!             <Attribute name="ipv4Address" type="string"/>
//!         </Class>
//!         <Aggregation source="RU" target="BTS" sourceMultiplicity="1..42"/>
//!     </Model>
//! "#;
//!
//! let graph = trellis_parser::parse(markup).expect("valid model");
//! assert_eq!(graph.root(), "BTS");
//! ```
//!
//! The only hard failures are malformed XML ([`ParseError::MalformedInput`])
//! and a model with no class flagged `isRoot`
//! ([`ParseError::MissingRootClass`]). No I/O happens here; callers hand in
//! the markup text.

mod builder;
mod error;


pub use error::ParseError;

use trellis_core::model::ModelGraph;

/// Parses XML markup into a validated [`ModelGraph`].
///
/// # Errors
///
/// - [`ParseError::MalformedInput`] if the markup is not well-formed XML.
/// - [`ParseError::MissingRootClass`] if no class carries `isRoot="true"`.
pub fn parse(markup: &str) -> Result<ModelGraph, ParseError> {
    let document = roxmltree::Document::parse(markup)?;
    builder::build(&document)
}
