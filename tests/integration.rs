//! End-to-end tests: wire-format parsing through aggregation, resolution
//! and mutation on one snapshot.
mod common;
use common::*;
use prefill::api::parse_response;
use prefill::prelude::*;

const GRAPH_RESPONSE_JSON: &str = r#"{
  "$schema": "https://example.com/schemas/action-blueprint-graph.json",
  "id": "bp-1",
  "tenant_id": "tenant-1",
  "name": "Onboarding",
  "description": "",
  "category": "ops",
  "nodes": [
    {
      "id": "n1",
      "type": "form",
      "position": { "x": 0, "y": 0 },
      "data": {
        "id": "action-1",
        "component_key": "c1",
        "component_type": "form",
        "component_id": "f1",
        "name": "Parent",
        "input_mapping": {}
      }
    },
    {
      "id": "n2",
      "type": "form",
      "position": { "x": 200, "y": 0 },
      "data": {
        "id": "action-2",
        "component_key": "c2",
        "component_type": "form",
        "component_id": "f2",
        "name": "Child",
        "input_mapping": {
          "email": {
            "type": "form_field",
            "component_key": "c1",
            "output_key": "username",
            "is_metadata": false
          }
        }
      }
    }
  ],
  "edges": [{ "source": "n1", "target": "n2" }],
  "forms": [
    {
      "id": "f1",
      "name": "Parent form",
      "field_schema": {
        "type": "object",
        "properties": {
          "username": { "avantos_type": "short-text", "type": "string" },
          "contact": { "avantos_type": "short-text", "type": "string", "format": "email" },
          "notes": { "avantos_type": "multi-line-text", "type": "string", "format": "fancy-widget" }
        },
        "required": ["username"]
      }
    },
    {
      "id": "f2",
      "name": "Child form",
      "field_schema": {
        "type": "object",
        "properties": {
          "email": { "avantos_type": "short-text", "type": "string", "format": "email" }
        },
        "required": []
      }
    }
  ],
  "branches": [],
  "triggers": []
}"#;

#[test]
fn test_parses_the_wire_response_into_a_canonical_graph() {
    let graph = parse_response(GRAPH_RESPONSE_JSON).expect("response should convert");

    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.edges.len(), 1);
    assert_eq!(graph.forms.len(), 2);

    let parent = graph.node("n1").unwrap();
    assert_eq!(parent.name, "Parent");
    assert_eq!(parent.component_key, "c1");
    assert_eq!(parent.form_id, "f1");

    let child = graph.node("n2").unwrap();
    let entry = child.input_mapping.get("email").unwrap();
    assert_eq!(entry.kind, MappingKind::FormField);
    assert_eq!(entry.component_key, "c1");
    assert_eq!(entry.output_key, "username");
    assert!(entry.is_consistent());
}

#[test]
fn test_conversion_normalizes_unrecognized_formats() {
    let graph = parse_response(GRAPH_RESPONSE_JSON).unwrap();
    let form = graph.form_for_node("f1").unwrap();
    let fields = form.fields();

    assert_eq!(fields[0].name, "username");
    assert_eq!(fields[0].format, None);
    assert_eq!(fields[1].name, "contact");
    assert_eq!(fields[1].format, Some(FieldFormat::Email));
    // "fancy-widget" is not a recognized format and must not pass through.
    assert_eq!(fields[2].name, "notes");
    assert_eq!(fields[2].format, None);
}

#[test]
fn test_conversion_rejects_unknown_mapping_kinds() {
    let json = GRAPH_RESPONSE_JSON.replace("\"form_field\"", "\"teleport\"");
    let err = parse_response(&json).unwrap_err();
    assert!(err.to_string().contains("teleport"));
}

#[test]
fn test_conversion_rejects_duplicate_node_ids() {
    // Rename node n2 to n1 so two nodes share an id.
    let json = GRAPH_RESPONSE_JSON.replace("\"id\": \"n2\"", "\"id\": \"n1\"");
    let err = parse_response(&json).unwrap_err();
    assert!(err.to_string().contains("duplicate node id 'n1'"));
}

#[test]
fn test_parse_failure_surfaces_as_a_conversion_error() {
    let err = parse_response("{ not json").unwrap_err();
    assert!(err.to_string().contains("Failed to parse graph JSON"));
}

// The literal scenario from the engine contract: parent n1 with a
// username field feeding child n2.
#[test]
fn test_parent_child_scenario_end_to_end() {
    let graph = mock_graph(
        vec![
            mock_node_with_key("n1", "Parent", "c1", "f1"),
            mock_node_with_key("n2", "Child", "c2", "f2"),
        ],
        vec![mock_edge("n1", "n2")],
        vec![mock_form(
            "f1",
            "Parent form",
            &[("username", FieldKind::String, None)],
        )],
    );

    let parents = graph.direct_parents("n2");
    assert_eq!(parents.len(), 1);
    assert_eq!(parents[0].id, "n1");

    let sources = all_data_sources(&graph, "n2");
    let item = &sources["Parent"][0];
    assert_eq!(item.id, "direct:n1:username");
    assert_eq!(item.group, "Parent");
    assert_eq!(item.label, "username");
    assert_eq!(item.value_type, FieldKind::String);
    assert_eq!(item.entry, MappingEntry::form_field("c1", "username"));

    let next = set_mapping(&graph, "n2", "email", Some(item.entry.clone()));
    assert_eq!(next.node("n1"), graph.node("n1"));

    let next_sources = all_data_sources(&next, "n2");
    let selected = find_selected_item(
        &next.node("n2").unwrap().input_mapping,
        Some("email"),
        &next_sources,
    )
    .unwrap();
    assert_eq!(selected.group, "Parent");
    assert_eq!(selected.item.id, "direct:n1:username");
}

#[test]
fn test_fetched_snapshot_drives_the_store_reducer() {
    let graph = parse_response(GRAPH_RESPONSE_JSON).unwrap();

    let mut store = SnapshotStore::new();
    let key = SnapshotKey::new("tenant-1", "bp-1");
    store.replace(key.clone(), graph);

    let current = store.get(&key).unwrap();
    let sources = all_data_sources(current, "n2");
    let item = sources["Parent"]
        .iter()
        .find(|i| i.label == "contact")
        .unwrap()
        .clone();

    assert!(store.apply(&key, "n2", "contact_field", Some(item.entry.clone())));
    let updated = store.get(&key).unwrap();
    assert_eq!(
        updated.node("n2").unwrap().input_mapping.get("contact_field"),
        Some(&item.entry)
    );
}

fn mock_node_with_key(id: &str, name: &str, component_key: &str, form_id: &str) -> GraphNode {
    let mut node = mock_node(id, name, form_id);
    node.component_key = component_key.to_string();
    node
}
