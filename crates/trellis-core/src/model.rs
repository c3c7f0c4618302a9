//! Entity model for UML-like class graphs.
//!
//! This module contains the typed representation of a class model after
//! parsing: classes with their attributes, aggregation edges between
//! classes, and the designated root class.
//!
//! # Pipeline Position
//!
//! ```text
//! XML Source
//!     ↓ trellis-parser
//! ModelGraph (these types) - validated classes and aggregations
//!     ↓ trellis::export
//! Hierarchical markup / metadata projection
//! ```
//!
//! A [`ModelGraph`] is built once per run and read-only afterwards. The
//! builder derives everything (including per-class multiplicity) before the
//! graph is published, so no partially-constructed state is ever observable.

use indexmap::IndexMap;

/// A single attribute of a model class.
///
/// Leaf value owned by exactly one [`ClassInfo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassAttribute {
    /// Attribute name, used as the element name in hierarchical output.
    pub name: String,

    /// Technical type name (e.g. `uint32`, `string`).
    pub ty: String,
}

impl ClassAttribute {
    /// Creates a new attribute from name and type.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// A directed containment edge between two classes.
///
/// `source` is contained within `target`. Endpoints are class names and are
/// not required to exist in the class registry; consumers that encounter a
/// dangling endpoint simply do not expand it. Duplicate edges are kept as
/// distinct instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregation {
    /// Name of the contained class.
    pub source: String,

    /// Name of the containing class.
    pub target: String,

    /// Multiplicity of the source side, as a range string
    /// (`"min..max"`, or a bare value meaning `min == max`).
    pub source_multiplicity: String,

    /// Multiplicity of the target side, same format.
    pub target_multiplicity: String,
}

/// A class in the model.
///
/// `min_multiplicity`/`max_multiplicity` are populated only if the class
/// appears as the `source` of at least one aggregation; when several
/// aggregations share the same source, the last one parsed wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassInfo {
    /// Class name; unique key in the graph's class registry.
    pub name: String,

    /// Whether this class is the traversal origin for hierarchical output.
    pub is_root: bool,

    /// Free-form documentation string, empty when absent from the input.
    pub documentation: String,

    /// Attributes in document order.
    pub attributes: Vec<ClassAttribute>,

    /// Lower bound of the source-side multiplicity, if this class is an
    /// aggregation source.
    pub min_multiplicity: Option<String>,

    /// Upper bound of the source-side multiplicity, if this class is an
    /// aggregation source.
    pub max_multiplicity: Option<String>,
}

/// A complete, validated class model.
///
/// The class registry preserves parse order; lookups are by class name.
/// The graph is immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelGraph {
    classes: IndexMap<String, ClassInfo>,
    aggregations: Vec<Aggregation>,
    root: String,
}

impl ModelGraph {
    /// Creates a graph from its parts.
    ///
    /// The builder in `trellis-parser` is the usual caller; `root` is the
    /// name of the class flagged as root there. Consumers that receive a
    /// graph from elsewhere must not assume `root` exists in `classes`.
    pub fn new(
        classes: IndexMap<String, ClassInfo>,
        aggregations: Vec<Aggregation>,
        root: String,
    ) -> Self {
        Self {
            classes,
            aggregations,
            root,
        }
    }

    /// Name of the designated root class.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Looks up a class by name.
    pub fn class(&self, name: &str) -> Option<&ClassInfo> {
        self.classes.get(name)
    }

    /// All classes in parse order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassInfo> {
        self.classes.values()
    }

    /// Number of classes in the registry.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// All aggregation edges in parse order.
    pub fn aggregations(&self) -> &[Aggregation] {
        &self.aggregations
    }

    /// Source names of every aggregation whose target is `target`, in
    /// aggregation-list order. Duplicates are yielded as-is.
    pub fn children_of<'a>(&'a self, target: &'a str) -> impl Iterator<Item = &'a str> {
        self.aggregations
            .iter()
            .filter(move |agg| agg.target == target)
            .map(|agg| agg.source.as_str())
    }

    /// Whether `name` appears as the source of any aggregation.
    pub fn is_aggregation_source(&self, name: &str) -> bool {
        self.aggregations.iter().any(|agg| agg.source == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> ModelGraph {
        let mut classes = IndexMap::new();
        classes.insert(
            "BTS".to_string(),
            ClassInfo {
                name: "BTS".to_string(),
                is_root: true,
                documentation: "Base transceiver station".to_string(),
                attributes: vec![ClassAttribute::new("id", "uint32")],
                min_multiplicity: None,
                max_multiplicity: None,
            },
        );
        classes.insert(
            "RU".to_string(),
            ClassInfo {
                name: "RU".to_string(),
                is_root: false,
                documentation: String::new(),
                attributes: vec![ClassAttribute::new("ipv4Address", "string")],
                min_multiplicity: Some("1".to_string()),
                max_multiplicity: Some("2".to_string()),
            },
        );
        ModelGraph::new(
            classes,
            vec![Aggregation {
                source: "RU".to_string(),
                target: "BTS".to_string(),
                source_multiplicity: "1..2".to_string(),
                target_multiplicity: "1".to_string(),
            }],
            "BTS".to_string(),
        )
    }

    #[test]
    fn class_lookup_and_root() {
        let graph = sample_graph();
        assert_eq!(graph.root(), "BTS");
        assert_eq!(graph.class_count(), 2);
        assert!(graph.class("BTS").unwrap().is_root);
        assert!(graph.class("Missing").is_none());
    }

    #[test]
    fn children_follow_aggregation_order() {
        let graph = sample_graph();
        let children: Vec<_> = graph.children_of("BTS").collect();
        assert_eq!(children, vec!["RU"]);
        assert_eq!(graph.children_of("RU").count(), 0);
    }

    #[test]
    fn aggregation_source_detection() {
        let graph = sample_graph();
        assert!(graph.is_aggregation_source("RU"));
        assert!(!graph.is_aggregation_source("BTS"));
    }
}
