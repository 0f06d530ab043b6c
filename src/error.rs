use thiserror::Error;

/// Errors that can occur when converting a custom graph format into a
/// canonical [`Graph`](crate::graph::Graph).
///
/// Missing lookups inside an already-constructed graph (dangling form ids,
/// unknown node ids, parents without forms) are *not* errors: every index
/// operation degrades to an empty collection or `None` so the caller can
/// render an empty state instead of crashing.
#[derive(Error, Debug, Clone)]
pub enum GraphConversionError {
    #[error("Failed to parse graph JSON: {0}")]
    JsonParseError(String),

    #[error("Invalid graph data: {0}")]
    ValidationError(String),

    #[error("Node '{node_id}' carries a mapping entry with unknown type: '{type_name}'")]
    InvalidMappingKind { node_id: String, type_name: String },
}
