use super::item::DataSourceItem;
use super::provider::{DataSource, ListArgs};
use crate::graph::{FieldFormat, FieldKind, MappingEntry};

/// Process-wide constants available to every node, independent of the graph
/// topology. The built-in set is configuration, not derived data; callers
/// can swap in their own list as long as the item shape is preserved.
#[derive(Debug, Clone)]
pub struct GlobalSource {
    items: Vec<DataSourceItem>,
}

impl GlobalSource {
    pub fn new(items: Vec<DataSourceItem>) -> Self {
        Self { items }
    }
}

impl Default for GlobalSource {
    fn default() -> Self {
        Self::new(vec![
            DataSourceItem {
                id: "global:action.title".to_string(),
                group: "Action Properties".to_string(),
                label: "title".to_string(),
                value_type: FieldKind::String,
                format: None,
                entry: MappingEntry::metadata("action", "title"),
            },
            DataSourceItem {
                id: "global:client.email".to_string(),
                group: "Client Organization".to_string(),
                label: "contact.email".to_string(),
                value_type: FieldKind::String,
                format: Some(FieldFormat::Email),
                entry: MappingEntry::metadata("clientOrg", "contact.email"),
            },
        ])
    }
}

impl DataSource for GlobalSource {
    fn id(&self) -> &str {
        "global"
    }

    fn label(&self) -> &str {
        "Global data"
    }

    fn list_for(&self, _args: ListArgs<'_>) -> Vec<DataSourceItem> {
        self.items.clone()
    }
}
