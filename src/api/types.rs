use ahash::AHashSet;
use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::GraphConversionError;
use crate::graph::{
    FieldFormat, FieldKind, FieldProperty, Form, Graph, GraphEdge, GraphNode, IntoGraph,
    MappingEntry,
};

/// The action-blueprint graph endpoint response. Only used for conversion
/// into the canonical [`Graph`]; presentation-only fields (positions, node
/// render types) are dropped on the way in.
#[derive(Debug, Deserialize)]
pub struct BlueprintGraphResponse {
    #[serde(rename = "$schema", default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub tenant_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    pub nodes: Vec<WireNode>,
    pub edges: Vec<WireEdge>,
    #[serde(default)]
    pub forms: Vec<WireForm>,
    #[serde(default)]
    pub branches: Vec<serde_json::Value>,
    #[serde(default)]
    pub triggers: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct WireNode {
    pub id: String,
    #[serde(rename = "type", default)]
    pub node_type: Option<String>,
    #[serde(default)]
    pub position: Option<WirePosition>,
    pub data: WireNodeData,
}

#[derive(Debug, Deserialize)]
pub struct WirePosition {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Deserialize)]
pub struct WireNodeData {
    #[serde(default)]
    pub id: String,
    pub component_key: String,
    #[serde(default)]
    pub component_type: String,
    /// The form reference; becomes `form_id` on the canonical node.
    #[serde(default)]
    pub component_id: String,
    pub name: String,
    #[serde(default)]
    pub input_mapping: IndexMap<String, WireMappingEntry>,
}

#[derive(Debug, Deserialize)]
pub struct WireMappingEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub component_key: String,
    pub output_key: String,
    #[serde(default)]
    pub is_metadata: bool,
}

#[derive(Debug, Deserialize)]
pub struct WireEdge {
    pub source: String,
    pub target: String,
}

#[derive(Debug, Deserialize)]
pub struct WireForm {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub field_schema: WireFieldSchema,
}

#[derive(Debug, Deserialize, Default)]
pub struct WireFieldSchema {
    #[serde(rename = "type", default)]
    pub schema_type: Option<String>,
    #[serde(default)]
    pub properties: IndexMap<String, WireProperty>,
    #[serde(default)]
    pub required: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct WireProperty {
    #[serde(default)]
    pub avantos_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "type", default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
}

/// Anything that is not an array or an object is treated as a string field;
/// only recognized formats survive, and only on string fields.
fn convert_property(prop: &WireProperty) -> FieldProperty {
    let kind = match prop.property_type.as_deref() {
        Some("array") => FieldKind::Array,
        Some("object") => FieldKind::Object,
        _ => FieldKind::String,
    };
    let format = match (kind, prop.format.as_deref()) {
        (FieldKind::String, Some("email")) => Some(FieldFormat::Email),
        (FieldKind::String, Some("date")) => Some(FieldFormat::Date),
        (FieldKind::String, Some("uri")) => Some(FieldFormat::Uri),
        _ => None,
    };
    FieldProperty { kind, format }
}

fn convert_entry(
    node_id: &str,
    entry: WireMappingEntry,
) -> Result<MappingEntry, GraphConversionError> {
    // The constructors re-derive `is_metadata` from the kind, so an
    // inconsistent wire flag cannot enter the canonical model.
    match entry.kind.as_str() {
        "form_field" => Ok(MappingEntry::form_field(
            entry.component_key,
            entry.output_key,
        )),
        "metadata" => Ok(MappingEntry::metadata(entry.component_key, entry.output_key)),
        other => Err(GraphConversionError::InvalidMappingKind {
            node_id: node_id.to_string(),
            type_name: other.to_string(),
        }),
    }
}

impl IntoGraph for BlueprintGraphResponse {
    fn into_graph(self) -> Result<Graph, GraphConversionError> {
        // Node ids must be unique; every lookup downstream keys on them.
        let mut seen = AHashSet::with_capacity(self.nodes.len());
        for wire in &self.nodes {
            if !seen.insert(wire.id.as_str()) {
                return Err(GraphConversionError::ValidationError(format!(
                    "duplicate node id '{}'",
                    wire.id
                )));
            }
        }

        let mut nodes = Vec::with_capacity(self.nodes.len());
        for wire in self.nodes {
            let mut input_mapping = IndexMap::with_capacity(wire.data.input_mapping.len());
            for (field, entry) in wire.data.input_mapping {
                input_mapping.insert(field, convert_entry(&wire.id, entry)?);
            }
            nodes.push(GraphNode {
                id: wire.id,
                name: wire.data.name,
                component_key: wire.data.component_key,
                form_id: wire.data.component_id,
                input_mapping,
            });
        }

        let edges = self
            .edges
            .into_iter()
            .map(|e| GraphEdge {
                source: e.source,
                target: e.target,
            })
            .collect();

        let forms = self
            .forms
            .into_iter()
            .map(|f| Form {
                id: f.id,
                name: f.name,
                field_schema: f
                    .field_schema
                    .properties
                    .iter()
                    .map(|(name, prop)| (name.clone(), convert_property(prop)))
                    .collect(),
            })
            .collect();

        Ok(Graph {
            nodes,
            edges,
            forms,
        })
    }
}

/// Parses a blueprint-graph endpoint response straight into a canonical
/// [`Graph`].
pub fn parse_response(json: &str) -> Result<Graph, GraphConversionError> {
    let response: BlueprintGraphResponse =
        serde_json::from_str(json).map_err(|e| GraphConversionError::JsonParseError(e.to_string()))?;
    response.into_graph()
}
