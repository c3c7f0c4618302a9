//! Graph construction from a parsed XML document.
//!
//! The builder makes three passes over the document, all in document order:
//! classes first, then aggregations, then the multiplicity derivation that
//! folds each aggregation's `sourceMultiplicity` into its source class.
//! Only after all three passes does [`build`] publish the graph, so no
//! caller ever observes a class without its derived multiplicity.

use indexmap::IndexMap;
use log::debug;
use roxmltree::{Document, Node};

use trellis_core::model::{Aggregation, ClassAttribute, ClassInfo, ModelGraph};

use crate::error::ParseError;

const CLASS_TAG: &str = "Class";
const ATTRIBUTE_TAG: &str = "Attribute";
const AGGREGATION_TAG: &str = "Aggregation";

/// Builds a validated [`ModelGraph`] from a well-formed document.
pub(crate) fn build(document: &Document<'_>) -> Result<ModelGraph, ParseError> {
    let mut classes = IndexMap::new();
    let mut root: Option<String> = None;

    for elem in elements_named(document, CLASS_TAG) {
        // Nameless classes are skipped, not rejected.
        let Some(name) = non_empty_attribute(&elem, "name") else {
            debug!("Skipping Class element without a name attribute");
            continue;
        };

        let info = read_class(&elem, name);
        if info.is_root {
            root = Some(name.to_string());
        }
        if classes.insert(name.to_string(), info).is_some() {
            debug!(class = name; "Duplicate class name, keeping the later definition");
        }
    }

    let aggregations: Vec<Aggregation> = elements_named(document, AGGREGATION_TAG)
        .filter_map(|elem| read_aggregation(&elem))
        .collect();

    derive_multiplicities(&mut classes, &aggregations);

    let root = root.ok_or(ParseError::MissingRootClass)?;
    debug!(
        root,
        classes = classes.len(),
        aggregations = aggregations.len();
        "Model graph built"
    );

    Ok(ModelGraph::new(classes, aggregations, root))
}

/// All elements with the given tag name, anywhere in the document, in
/// document order.
fn elements_named<'a, 'input>(
    document: &'a Document<'input>,
    tag: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    document
        .descendants()
        .filter(move |node| node.is_element() && node.has_tag_name(tag))
}

fn non_empty_attribute<'a>(node: &Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name).filter(|value| !value.is_empty())
}

fn read_class(elem: &Node<'_, '_>, name: &str) -> ClassInfo {
    let is_root = elem
        .attribute("isRoot")
        .is_some_and(|value| value.eq_ignore_ascii_case("true"));

    let attributes = elem
        .descendants()
        .filter(|node| node.is_element() && node.has_tag_name(ATTRIBUTE_TAG))
        .filter_map(|attr| {
            // Both fields are required; incomplete attributes are dropped.
            let name = attr.attribute("name")?;
            let ty = attr.attribute("type")?;
            Some(ClassAttribute::new(name, ty))
        })
        .collect();

    ClassInfo {
        name: name.to_string(),
        is_root,
        documentation: elem.attribute("documentation").unwrap_or_default().to_string(),
        attributes,
        min_multiplicity: None,
        max_multiplicity: None,
    }
}

fn read_aggregation(elem: &Node<'_, '_>) -> Option<Aggregation> {
    let source = non_empty_attribute(elem, "source")?;
    let target = non_empty_attribute(elem, "target")?;

    Some(Aggregation {
        source: source.to_string(),
        target: target.to_string(),
        source_multiplicity: elem.attribute("sourceMultiplicity").unwrap_or("1").to_string(),
        target_multiplicity: elem.attribute("targetMultiplicity").unwrap_or("1").to_string(),
    })
}

/// Folds source-side multiplicities into the classes that act as
/// aggregation sources. Later aggregations with the same source overwrite
/// earlier ones.
fn derive_multiplicities(classes: &mut IndexMap<String, ClassInfo>, aggregations: &[Aggregation]) {
    for agg in aggregations {
        let Some(class) = classes.get_mut(&agg.source) else {
            // Dangling source endpoint; tolerated per the data model.
            continue;
        };

        let mut bounds = agg.source_multiplicity.split("..");
        let min = bounds.next().unwrap_or(agg.source_multiplicity.as_str());
        let max = bounds.last().unwrap_or(min);

        class.min_multiplicity = Some(min.to_string());
        class.max_multiplicity = Some(max.to_string());
    }
}
