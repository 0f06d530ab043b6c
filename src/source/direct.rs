use super::item::DataSourceItem;
use super::node_field_items;
use super::provider::{DataSource, ListArgs};

/// Enumerates the form fields of the target node's immediate predecessors.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectParentSource;

impl DataSource for DirectParentSource {
    fn id(&self) -> &str {
        "direct-parent"
    }

    fn label(&self) -> &str {
        "Direct parent data"
    }

    fn list_for(&self, args: ListArgs<'_>) -> Vec<DataSourceItem> {
        let parents = args.graph.direct_parents(args.target_node_id);
        node_field_items(args.graph, parents, "direct")
    }
}
