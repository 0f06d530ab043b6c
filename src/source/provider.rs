use super::item::DataSourceItem;
use crate::graph::Graph;

/// Context handed to a provider when enumerating candidates for one node.
#[derive(Debug, Clone, Copy)]
pub struct ListArgs<'g> {
    pub graph: &'g Graph,
    pub target_node_id: &'g str,
}

/// Defines the contract for one data-source strategy.
///
/// The set of strategies is deliberately closed (global, direct parent,
/// transitive parent): aggregation order is a central decision, so new
/// strategies go through [`default_sources`](super::default_sources) rather
/// than an open plugin registry.
pub trait DataSource: Send + Sync {
    /// Stable identifier, metadata only.
    fn id(&self) -> &str;
    /// Human-readable label, metadata only.
    fn label(&self) -> &str;
    /// Enumerates the candidate prefill items for the target node.
    /// Read-only; safe to call repeatedly on the same snapshot.
    fn list_for(&self, args: ListArgs<'_>) -> Vec<DataSourceItem>;
}
