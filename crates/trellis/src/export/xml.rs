//! Hierarchical rendering of a model graph.
//!
//! Renders the containment structure as nested markup, starting at the root
//! class and following aggregation edges target-to-source, depth-first in
//! aggregation-list order. Output is plain UTF-8 text with a 4-space indent
//! per nesting level, no XML declaration, and no escaping (attribute types
//! are constrained to technical type names).

use trellis_core::model::ModelGraph;

use super::ExportError;

const INDENT: usize = 4;

/// Renders the graph as a nested hierarchy rooted at `root`.
///
/// # Errors
///
/// - [`ExportError::MissingRootClass`] if `root` is not in the graph.
/// - [`ExportError::CyclicModel`] if a class is revisited on the current
///   traversal path.
pub fn render(graph: &ModelGraph, root: &str) -> Result<String, ExportError> {
    if graph.class(root).is_none() {
        return Err(ExportError::MissingRootClass(root.to_string()));
    }

    let mut lines = Vec::new();
    let mut path = Vec::new();
    render_class(graph, root, 0, &mut path, &mut lines)?;

    Ok(lines.join("\n"))
}

fn render_class(
    graph: &ModelGraph,
    name: &str,
    depth: usize,
    path: &mut Vec<String>,
    lines: &mut Vec<String>,
) -> Result<(), ExportError> {
    if path.iter().any(|visited| visited == name) {
        return Err(ExportError::CyclicModel(name.to_string()));
    }
    path.push(name.to_string());

    let pad = " ".repeat(depth * INDENT);
    lines.push(format!("{pad}<{name}>"));

    // The class is guaranteed present: dangling children are filtered below
    // and the root is checked in `render`.
    if let Some(info) = graph.class(name) {
        let attr_pad = " ".repeat((depth + 1) * INDENT);
        for attr in &info.attributes {
            lines.push(format!("{attr_pad}<{0}>{1}</{0}>", attr.name, attr.ty));
        }
    }

    let children: Vec<&str> = graph.children_of(name).collect();
    for child in children {
        // An aggregation source with no registered class is a dangling
        // reference; it is not expanded.
        if graph.class(child).is_none() {
            continue;
        }
        render_class(graph, child, depth + 1, path, lines)?;
    }

    lines.push(format!("{pad}</{name}>"));
    path.pop();

    Ok(())
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use trellis_core::model::{Aggregation, ClassAttribute, ClassInfo, ModelGraph};

    use super::*;

    fn class(name: &str, is_root: bool, attributes: Vec<ClassAttribute>) -> ClassInfo {
        ClassInfo {
            name: name.to_string(),
            is_root,
            documentation: String::new(),
            attributes,
            min_multiplicity: None,
            max_multiplicity: None,
        }
    }

    fn aggregation(source: &str, target: &str) -> Aggregation {
        Aggregation {
            source: source.to_string(),
            target: target.to_string(),
            source_multiplicity: "1".to_string(),
            target_multiplicity: "1".to_string(),
        }
    }

    fn graph(classes: Vec<ClassInfo>, aggregations: Vec<Aggregation>, root: &str) -> ModelGraph {
        let classes: IndexMap<_, _> = classes
            .into_iter()
            .map(|info| (info.name.clone(), info))
            .collect();
        ModelGraph::new(classes, aggregations, root.to_string())
    }

    #[test]
    fn renders_nested_hierarchy_with_attributes() {
        let g = graph(
            vec![
                class("BTS", true, vec![ClassAttribute::new("id", "uint32")]),
                class("RU", false, vec![ClassAttribute::new("ipv4Address", "string")]),
            ],
            vec![aggregation("RU", "BTS")],
            "BTS",
        );

        let rendered = render(&g, "BTS").unwrap();
        assert_eq!(
            rendered,
            "<BTS>\n\
             \u{20}   <id>uint32</id>\n\
             \u{20}   <RU>\n\
             \u{20}       <ipv4Address>string</ipv4Address>\n\
             \u{20}   </RU>\n\
             </BTS>"
        );
    }

    #[test]
    fn children_render_in_aggregation_order() {
        let g = graph(
            vec![
                class("Root", true, vec![]),
                class("B", false, vec![]),
                class("A", false, vec![]),
            ],
            vec![aggregation("B", "Root"), aggregation("A", "Root")],
            "Root",
        );

        let rendered = render(&g, "Root").unwrap();
        let b_pos = rendered.find("<B>").unwrap();
        let a_pos = rendered.find("<A>").unwrap();
        assert!(b_pos < a_pos);
    }

    #[test]
    fn dangling_child_is_not_expanded() {
        let g = graph(
            vec![class("Root", true, vec![])],
            vec![aggregation("Ghost", "Root")],
            "Root",
        );

        let rendered = render(&g, "Root").unwrap();
        assert_eq!(rendered, "<Root>\n</Root>");
    }

    #[test]
    fn missing_root_class_fails() {
        let g = graph(vec![class("A", false, vec![])], vec![], "A");

        let err = render(&g, "Missing").unwrap_err();
        assert!(matches!(err, ExportError::MissingRootClass(name) if name == "Missing"));
    }

    #[test]
    fn cycle_fails_instead_of_recursing() {
        let g = graph(
            vec![class("A", true, vec![]), class("B", false, vec![])],
            vec![aggregation("B", "A"), aggregation("A", "B")],
            "A",
        );

        let err = render(&g, "A").unwrap_err();
        assert!(matches!(err, ExportError::CyclicModel(name) if name == "A"));
    }

    #[test]
    fn diamond_shape_renders_shared_child_twice() {
        // Two aggregations into the same child are duplicate containment,
        // not a cycle.
        let g = graph(
            vec![class("Root", true, vec![]), class("Leaf", false, vec![])],
            vec![aggregation("Leaf", "Root"), aggregation("Leaf", "Root")],
            "Root",
        );

        let rendered = render(&g, "Root").unwrap();
        assert_eq!(rendered.matches("<Leaf>").count(), 2);
    }
}
