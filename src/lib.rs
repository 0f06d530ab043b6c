//! # Prefill - Data-Source Resolution Engine for Blueprint Graphs
//!
//! **Prefill** computes, for any node in a directed acyclic workflow graph of
//! form-backed "action" nodes, the complete set of values available to
//! prefill that node's fields: process-wide globals plus every field
//! produced by an ancestor node. It also resolves and mutates a node's
//! current prefill mapping against that set.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical in-memory
//! snapshot of the graph. The primary workflow is:
//!
//! 1.  **Load Your Data**: Fetch and parse your blueprint format (the
//!     built-in [`api`] module handles the action-blueprint JSON response).
//! 2.  **Convert to the Canonical Model**: Implement the `IntoGraph` trait
//!     for your structs, or use [`api::parse_response`].
//! 3.  **Aggregate**: Call `all_data_sources` for the node being edited to
//!     get the grouped, deduplicated candidate list.
//! 4.  **Resolve & Mutate**: Use `find_selected_item` to highlight the
//!     current selection and `set_mapping` to produce the next snapshot.
//!
//! Reads flow one way (index → providers → aggregator → resolver) and every
//! write produces a fresh snapshot; the engine never patches a graph in
//! place, so snapshots are safe to share and cache.
//!
//! ## Quick Start
//!
//! ```rust
//! use prefill::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let graph = Graph {
//!         nodes: vec![
//!             GraphNode {
//!                 id: "n1".to_string(),
//!                 name: "Parent".to_string(),
//!                 component_key: "c1".to_string(),
//!                 form_id: "f1".to_string(),
//!                 input_mapping: Default::default(),
//!             },
//!             GraphNode {
//!                 id: "n2".to_string(),
//!                 name: "Child".to_string(),
//!                 component_key: "c2".to_string(),
//!                 form_id: "f2".to_string(),
//!                 input_mapping: Default::default(),
//!             },
//!         ],
//!         edges: vec![GraphEdge {
//!             source: "n1".to_string(),
//!             target: "n2".to_string(),
//!         }],
//!         forms: vec![Form {
//!             id: "f1".to_string(),
//!             name: "Parent form".to_string(),
//!             field_schema: [(
//!                 "username".to_string(),
//!                 FieldProperty { kind: FieldKind::String, format: None },
//!             )]
//!             .into_iter()
//!             .collect(),
//!         }],
//!     };
//!
//!     // Everything available to prefill node "n2", grouped for display.
//!     let sources = all_data_sources(&graph, "n2");
//!     let item = &sources["Parent"][0];
//!     assert_eq!(item.id, "direct:n1:username");
//!
//!     // Select it for the "email" field and re-resolve.
//!     let next = set_mapping(&graph, "n2", "email", Some(item.entry.clone()));
//!     let next_sources = all_data_sources(&next, "n2");
//!     let selected = find_selected_item(
//!         &next.node("n2").unwrap().input_mapping,
//!         Some("email"),
//!         &next_sources,
//!     );
//!     assert_eq!(selected.unwrap().group, "Parent");
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod error;
pub mod graph;
pub mod mapping;
pub mod prelude;
pub mod source;
pub mod store;
