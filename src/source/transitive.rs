use super::item::DataSourceItem;
use super::node_field_items;
use super::provider::{DataSource, ListArgs};

/// Enumerates the form fields of every ancestor beyond the direct parents.
/// Never overlaps [`DirectParentSource`](super::DirectParentSource): the
/// ancestor walk already excludes direct parents.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransitiveParentSource;

impl DataSource for TransitiveParentSource {
    fn id(&self) -> &str {
        "transitive-parent"
    }

    fn label(&self) -> &str {
        "Transitive parent data"
    }

    fn list_for(&self, args: ListArgs<'_>) -> Vec<DataSourceItem> {
        let parents = args.graph.transitive_parents(args.target_node_id);
        node_field_items(args.graph, parents, "transitive")
    }
}
