use crate::graph::{Graph, MappingEntry};

/// Produces a new snapshot with a single field's mapping set or removed on
/// a single node. Pure: the input graph is never touched, so callers may
/// keep it as a cache key for the previous state.
///
/// `entry = None` removes the mapping for `field_key` (a no-op if it was
/// absent); `Some` sets it. Every other node, and every other field of the
/// target node, is value-equal in the result.
///
/// An unknown `node_id` is not an error: the result is value-equal to the
/// input, and callers that care can detect the no-op by comparing the two.
pub fn set_mapping(
    graph: &Graph,
    node_id: &str,
    field_key: &str,
    entry: Option<MappingEntry>,
) -> Graph {
    let mut next = graph.clone();

    let Some(node) = next.nodes.iter_mut().find(|n| n.id == node_id) else {
        return next;
    };

    match entry {
        Some(entry) => {
            node.input_mapping.insert(field_key.to_string(), entry);
        }
        None => {
            // shift_remove keeps the remaining keys in declaration order.
            node.input_mapping.shift_remove(field_key);
        }
    }

    next
}
