//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions so a consumer can
//! pull in the whole engine surface with one `use`.
//!
//! # Example
//!
//! ```rust,no_run
//! use prefill::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/graph.json")?;
//! let graph = prefill::api::parse_response(&json)?;
//!
//! let sources = all_data_sources(&graph, "node-2");
//! for (group, items) in &sources {
//!     println!("{}: {} candidate(s)", group, items.len());
//! }
//! # Ok(())
//! # }
//! ```

// Canonical data model
pub use crate::graph::{
    FieldFormat, FieldKind, FieldMappingState, FieldProperty, Form, Graph, GraphEdge, GraphNode,
    MappingEntry, MappingKind, TargetField,
};

// Conversion layer
pub use crate::graph::IntoGraph;

// Data-source providers and aggregation
pub use crate::source::{
    DataSource, DataSourceItem, DataSourceMap, DirectParentSource, GlobalSource, ListArgs,
    TransitiveParentSource, aggregate, all_data_sources, default_sources,
};

// Mapping resolution and mutation
pub use crate::mapping::{SelectedItem, find_selected_item, set_mapping};

// Snapshot store
pub use crate::store::{SnapshotKey, SnapshotStore};

// Error types
pub use crate::error::GraphConversionError;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
