use indexmap::IndexMap;
use serde::Serialize;

use crate::graph::{FieldFormat, FieldKind, MappingEntry};

/// A candidate prefill value surfaced to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataSourceItem {
    /// Globally unique across all providers for one target node:
    /// `{providerTag}:{sourceNodeId}:{fieldName}` for node-derived items,
    /// a fixed literal for global items.
    pub id: String,
    /// Display grouping key: the source node's name, or a fixed category
    /// label for global items.
    pub group: String,
    /// The field's display name; defaults to the field name for
    /// node-derived items.
    pub label: String,
    pub value_type: FieldKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<FieldFormat>,
    /// The mapping entry this item produces when selected.
    pub entry: MappingEntry,
}

/// Aggregated provider output, keyed by display group in first-occurrence
/// order. Items within a group keep provider/traversal order.
pub type DataSourceMap = IndexMap<String, Vec<DataSourceItem>>;
