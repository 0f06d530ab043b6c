use super::definition::Graph;
use crate::error::GraphConversionError;

/// A trait for custom data models that can be converted into a canonical
/// [`Graph`].
///
/// This is the primary extension point for keeping the engine
/// format-agnostic. Implement it on whatever structs your transport layer
/// parses, and hand the resulting `Graph` to the index, providers and
/// mapping operations.
///
/// # Example
///
/// ```rust,no_run
/// use prefill::prelude::*;
/// use prefill::error::GraphConversionError;
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyStep { id: String, title: String, form: String }
/// struct MyBlueprint { steps: Vec<MyStep> }
///
/// // 2. Implement `IntoGraph` for your top-level struct. Note the full
/// // return type: the prelude's `Result` alias takes one parameter.
/// impl IntoGraph for MyBlueprint {
///     fn into_graph(self) -> std::result::Result<Graph, GraphConversionError> {
///         let nodes = self
///             .steps
///             .into_iter()
///             .map(|step| GraphNode {
///                 component_key: format!("component-{}", step.id),
///                 id: step.id,
///                 name: step.title,
///                 form_id: step.form,
///                 input_mapping: Default::default(),
///             })
///             .collect();
///
///         Ok(Graph {
///             nodes,
///             edges: vec![], // Convert your edges here as well
///             forms: vec![],
///         })
///     }
/// }
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into a canonical graph snapshot.
    fn into_graph(self) -> Result<Graph, GraphConversionError>;
}
