use super::direct::DirectParentSource;
use super::global::GlobalSource;
use super::item::DataSourceMap;
use super::provider::{DataSource, ListArgs};
use super::transitive::TransitiveParentSource;
use crate::graph::Graph;

/// The fixed provider registry in aggregation order: global, then direct
/// parents, then transitive parents.
pub fn default_sources() -> Vec<Box<dyn DataSource>> {
    vec![
        Box::new(GlobalSource::default()),
        Box::new(DirectParentSource),
        Box::new(TransitiveParentSource),
    ]
}

/// Computes the complete set of prefill candidates for `target_node_id`,
/// grouped by display group name.
///
/// Provider outputs are flattened in registry order and folded into an
/// insertion-ordered map: a group list is created on first occurrence and
/// appended to afterwards. Two sources that happen to share a group name
/// (two ancestors named the same, say) merge into one list in traversal
/// order; item ids stay unique because they embed the source node id.
///
/// Derived data only: recompute from the current snapshot on every use,
/// never cache independently of it.
pub fn all_data_sources(graph: &Graph, target_node_id: &str) -> DataSourceMap {
    aggregate(&default_sources(), graph, target_node_id)
}

/// Aggregation over a caller-supplied registry. Order of `sources` is the
/// order their items land in the map.
pub fn aggregate(
    sources: &[Box<dyn DataSource>],
    graph: &Graph,
    target_node_id: &str,
) -> DataSourceMap {
    let mut map = DataSourceMap::new();
    for source in sources {
        for item in source.list_for(ListArgs {
            graph,
            target_node_id,
        }) {
            map.entry(item.group.clone()).or_default().push(item);
        }
    }
    map
}
