use indexmap::IndexMap;
use serde::Serialize;

use crate::graph::MappingEntry;
use crate::source::{DataSourceItem, DataSourceMap};

/// A resolved selection: the aggregated item a field's current mapping
/// corresponds to, together with the group containing it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SelectedItem<'a> {
    pub group: &'a str,
    pub item: &'a DataSourceItem,
}

/// Finds which aggregated item (if any) the current mapping for
/// `selected_field` corresponds to.
///
/// Returns `None` when no field is selected, the field has no mapping, or
/// the data-source map is empty. Otherwise groups are scanned in map order
/// and items in list order; the first item matching on both keys wins, so
/// component-key collisions resolve deterministically.
///
/// The match compares the item's display *label* against the entry's
/// `output_key`. The two coincide for every built-in provider, but they are
/// conceptually different fields; this mirrors the historical behavior and
/// is kept deliberately. A provider whose labels diverge from field names
/// must revisit this match key.
pub fn find_selected_item<'a>(
    input_mapping: &IndexMap<String, MappingEntry>,
    selected_field: Option<&str>,
    data_sources: &'a DataSourceMap,
) -> Option<SelectedItem<'a>> {
    let field = selected_field.filter(|f| !f.is_empty())?;
    let current = input_mapping.get(field)?;

    data_sources.iter().find_map(|(group, items)| {
        items
            .iter()
            .find(|item| {
                item.entry.component_key == current.component_key
                    && item.label == current.output_key
            })
            .map(|item| SelectedItem {
                group: group.as_str(),
                item,
            })
    })
}
