pub mod aggregator;
pub mod direct;
pub mod global;
pub mod item;
pub mod provider;
pub mod transitive;

pub use aggregator::*;
pub use direct::DirectParentSource;
pub use global::GlobalSource;
pub use item::*;
pub use provider::*;
pub use transitive::TransitiveParentSource;

use crate::graph::{Graph, GraphNode, MappingEntry};

/// Shared construction for the parent-derived providers: one item per field
/// of each parent with a resolvable form. Parents whose `form_id` dangles
/// contribute nothing. The entry records the parent's `component_key`, not
/// its node id; the item id embeds the node id for uniqueness.
fn node_field_items(
    graph: &Graph,
    parents: Vec<&GraphNode>,
    id_prefix: &str,
) -> Vec<DataSourceItem> {
    parents
        .into_iter()
        .filter_map(|node| graph.form_for_node(&node.form_id).map(|form| (node, form)))
        .flat_map(|(node, form)| {
            form.fields().into_iter().map(move |field| DataSourceItem {
                id: format!("{}:{}:{}", id_prefix, node.id, field.name),
                group: node.name.clone(),
                label: field.label,
                value_type: field.value_type,
                format: field.format,
                entry: MappingEntry::form_field(node.component_key.as_str(), field.name.as_str()),
            })
        })
        .collect()
}
