use ahash::AHashSet;
use indexmap::IndexSet;

use super::definition::{FieldKind, FieldMappingState, Form, Graph, GraphNode, TargetField};

impl Graph {
    /// Finds a node by id.
    pub fn node(&self, node_id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    /// Returns the immediate predecessors of `node_id`: every node with an
    /// edge targeting it. Parallel edges collapse to one parent; a self-loop
    /// makes a node its own direct parent. Result follows node declaration
    /// order.
    pub fn direct_parents(&self, node_id: &str) -> Vec<&GraphNode> {
        let parent_ids: AHashSet<&str> = self
            .edges
            .iter()
            .filter(|e| e.target == node_id)
            .map(|e| e.source.as_str())
            .collect();

        self.nodes
            .iter()
            .filter(|n| parent_ids.contains(n.id.as_str()))
            .collect()
    }

    /// Returns every ancestor of `node_id` reachable over parent edges,
    /// excluding the direct parents and `node_id` itself. A visited set
    /// guards against cycles and self-loops; result order is the DFS
    /// insertion order and deterministic for a fixed graph.
    pub fn transitive_parents(&self, node_id: &str) -> Vec<&GraphNode> {
        let direct_ids: AHashSet<&str> = self
            .direct_parents(node_id)
            .iter()
            .map(|n| n.id.as_str())
            .collect();

        let mut visited: IndexSet<&str> = IndexSet::new();
        self.collect_ancestors(node_id, &mut visited);

        visited
            .into_iter()
            .filter(|id| *id != node_id && !direct_ids.contains(id))
            .filter_map(|id| self.node(id))
            .collect()
    }

    fn collect_ancestors<'g>(&'g self, node_id: &str, visited: &mut IndexSet<&'g str>) {
        for parent in self.direct_parents(node_id) {
            if visited.insert(parent.id.as_str()) {
                self.collect_ancestors(&parent.id, visited);
            }
        }
    }

    /// Resolves a node's form reference: the first form whose id matches.
    /// An empty or dangling `form_id` yields `None`, never an error.
    pub fn form_for_node(&self, form_id: &str) -> Option<&Form> {
        if form_id.is_empty() {
            return None;
        }
        self.forms.iter().find(|f| f.id == form_id)
    }
}

impl Form {
    /// Maps the field schema, in declaration order, to prefill target
    /// fields. Labels default to the field name. Only string fields carry a
    /// format refinement.
    pub fn fields(&self) -> Vec<TargetField> {
        self.field_schema
            .iter()
            .map(|(name, prop)| {
                let format = match prop.kind {
                    FieldKind::String => prop.format,
                    FieldKind::Object | FieldKind::Array => None,
                };
                TargetField {
                    name: name.clone(),
                    label: name.clone(),
                    value_type: prop.kind,
                    format,
                }
            })
            .collect()
    }
}

impl GraphNode {
    /// Pairs each field declared on `form` with whether this node has a
    /// mapping configured for it. Fields come from the form's schema, not
    /// from the mapping: stray mapping keys that no longer exist on the
    /// form are not listed.
    pub fn fields_with_mapping_state(&self, form: &Form) -> Vec<FieldMappingState> {
        form.field_schema
            .iter()
            .map(|(key, prop)| FieldMappingState {
                key: key.clone(),
                property: *prop,
                has_mapping: self.input_mapping.contains_key(key),
            })
            .collect()
    }
}
