//! Metadata projection of a model graph.
//!
//! Emits one record per class, in a fixed priority order that is an
//! external contract with a downstream consumer (see
//! [`crate::config::DEFAULT_CLASS_ORDER`]): classes absent from the graph
//! are skipped, classes outside the order are never emitted.

use serde::Serialize;

use trellis_core::model::ModelGraph;

/// One entry of a class's `parameters` list: either an own attribute or a
/// contained child class (rendered with type `"class"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

/// Source-side multiplicity bounds, emitted only for classes that appear as
/// an aggregation source. Either bound may be `null` if the parse yielded
/// no value for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Multiplicity {
    pub min: Option<String>,
    pub max: Option<String>,
}

/// Metadata record of a single class.
///
/// Serializes with field order `class, documentation, isRoot, parameters`
/// followed by `min, max` when the multiplicity section is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassMeta {
    pub class: String,
    pub documentation: String,
    #[serde(rename = "isRoot")]
    pub is_root: bool,
    pub parameters: Vec<Parameter>,
    #[serde(flatten)]
    pub multiplicity: Option<Multiplicity>,
}

/// Projects the graph into metadata records, in `order`.
///
/// Pure function of the graph; the graph is expected to be validated
/// already, and there is no error path.
pub fn project(graph: &ModelGraph, order: &[String]) -> Vec<ClassMeta> {
    order
        .iter()
        .filter_map(|name| {
            let info = graph.class(name)?;

            let mut parameters: Vec<Parameter> = info
                .attributes
                .iter()
                .map(|attr| Parameter {
                    name: attr.name.clone(),
                    ty: attr.ty.clone(),
                })
                .collect();
            parameters.extend(graph.children_of(name).map(|child| Parameter {
                name: child.to_string(),
                ty: "class".to_string(),
            }));

            let multiplicity = graph.is_aggregation_source(name).then(|| Multiplicity {
                min: info.min_multiplicity.clone(),
                max: info.max_multiplicity.clone(),
            });

            Some(ClassMeta {
                class: info.name.clone(),
                documentation: info.documentation.clone(),
                is_root: info.is_root,
                parameters,
                multiplicity,
            })
        })
        .collect()
}
