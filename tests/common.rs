//! Common test utilities for building graph snapshots.
use prefill::prelude::*;

/// Creates a node with the conventions the mock graphs rely on:
/// `component_key` is `component_<id>` so tests can tell component keys
/// apart from node ids.
#[allow(dead_code)]
pub fn mock_node(id: &str, name: &str, form_id: &str) -> GraphNode {
    GraphNode {
        id: id.to_string(),
        name: name.to_string(),
        component_key: format!("component_{}", id),
        form_id: form_id.to_string(),
        input_mapping: Default::default(),
    }
}

#[allow(dead_code)]
pub fn mock_edge(source: &str, target: &str) -> GraphEdge {
    GraphEdge {
        source: source.to_string(),
        target: target.to_string(),
    }
}

/// Creates a form whose schema declares `fields` in the given order.
#[allow(dead_code)]
pub fn mock_form(id: &str, name: &str, fields: &[(&str, FieldKind, Option<FieldFormat>)]) -> Form {
    Form {
        id: id.to_string(),
        name: name.to_string(),
        field_schema: fields
            .iter()
            .map(|(field, kind, format)| {
                (
                    field.to_string(),
                    FieldProperty {
                        kind: *kind,
                        format: *format,
                    },
                )
            })
            .collect(),
    }
}

#[allow(dead_code)]
pub fn mock_graph(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>, forms: Vec<Form>) -> Graph {
    Graph {
        nodes,
        edges,
        forms,
    }
}

/// A three-level chain `a -> b -> c` where every node has a resolvable
/// form:
///
/// - form `fa` on `a`: `username` (string), `email` (string, email)
/// - form `fb` on `b`: `notes` (string)
/// - form `fc` on `c`: `summary` (string)
#[allow(dead_code)]
pub fn chain_graph() -> Graph {
    mock_graph(
        vec![
            mock_node("a", "Intake", "fa"),
            mock_node("b", "Review", "fb"),
            mock_node("c", "Approval", "fc"),
        ],
        vec![mock_edge("a", "b"), mock_edge("b", "c")],
        vec![
            mock_form(
                "fa",
                "Intake form",
                &[
                    ("username", FieldKind::String, None),
                    ("email", FieldKind::String, Some(FieldFormat::Email)),
                ],
            ),
            mock_form("fb", "Review form", &[("notes", FieldKind::String, None)]),
            mock_form(
                "fc",
                "Approval form",
                &[("summary", FieldKind::String, None)],
            ),
        ],
    )
}
