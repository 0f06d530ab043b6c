use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The complete, canonical snapshot of an action blueprint graph.
/// This is the target structure for any custom data model conversion,
/// and the single input every engine operation works from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub forms: Vec<Form>,
}

/// A single action step in the workflow graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Unique identifier, stable across re-fetches.
    pub id: String,
    /// Human-readable label, also the default display group for data
    /// sourced from this node.
    pub name: String,
    /// Opaque key written into mapping entries that reference this node's
    /// output. Distinct from `id`: other nodes store the component key,
    /// never the node id, when mapping to this node.
    pub component_key: String,
    /// Reference to the form defining this node's fields. May be empty or
    /// dangling, which means "no fields available".
    pub form_id: String,
    /// Per-field prefill configuration. The only part of the model that
    /// changes during a session.
    #[serde(default)]
    pub input_mapping: IndexMap<String, MappingEntry>,
}

/// A directed connection: `source` is a direct parent of `target`.
/// Duplicate edges and self-loops are tolerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
}

/// A named field container referenced by nodes via `form_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub id: String,
    pub name: String,
    /// Field declarations in schema order. Iteration order is significant
    /// and follows insertion order.
    #[serde(default)]
    pub field_schema: IndexMap<String, FieldProperty>,
}

/// Schema declaration for a single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldProperty {
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<FieldFormat>,
}

/// The value type of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Object,
    Array,
}

/// Recognized format refinement for string fields. Anything else on the
/// wire normalizes to no format at conversion time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldFormat {
    Email,
    Date,
    Uri,
}

/// Where a mapping entry sources its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingKind {
    /// Another node's form output.
    FormField,
    /// A process-wide global value.
    Metadata,
}

/// The value stored for a mapped field: a pointer to a producer
/// (`component_key`) and the field/path on it (`output_key`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    #[serde(rename = "type")]
    pub kind: MappingKind,
    /// The producing node's `component_key`, or a global namespace such as
    /// `action` or `clientOrg`. Never a node id.
    pub component_key: String,
    /// The producing field's name, or a dotted path for metadata entries.
    pub output_key: String,
    /// Redundant with `kind`; kept on the wire and held consistent by the
    /// constructors below.
    pub is_metadata: bool,
}

impl MappingEntry {
    /// An entry sourced from another node's form output.
    pub fn form_field(component_key: impl Into<String>, output_key: impl Into<String>) -> Self {
        Self {
            kind: MappingKind::FormField,
            component_key: component_key.into(),
            output_key: output_key.into(),
            is_metadata: false,
        }
    }

    /// An entry sourced from a global namespace.
    pub fn metadata(component_key: impl Into<String>, output_key: impl Into<String>) -> Self {
        Self {
            kind: MappingKind::Metadata,
            component_key: component_key.into(),
            output_key: output_key.into(),
            is_metadata: true,
        }
    }

    /// `true` iff the redundant `is_metadata` flag agrees with `kind`.
    pub fn is_consistent(&self) -> bool {
        self.is_metadata == (self.kind == MappingKind::Metadata)
    }
}

/// A form field surfaced to the presentation layer as a prefill target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetField {
    pub name: String,
    pub label: String,
    pub value_type: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<FieldFormat>,
}

/// One form field together with whether the node has a prefill mapping
/// configured for it.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldMappingState {
    pub key: String,
    pub property: FieldProperty,
    pub has_mapping: bool,
}
