use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::graph::{Graph, MappingEntry};
use crate::mapping::set_mapping;

/// Identifies one fetched blueprint graph: snapshots are cached per
/// tenant/blueprint pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SnapshotKey {
    pub tenant_id: String,
    pub blueprint_id: String,
}

impl SnapshotKey {
    pub fn new(tenant_id: impl Into<String>, blueprint_id: impl Into<String>) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            blueprint_id: blueprint_id.into(),
        }
    }
}

/// Owns the current graph snapshots, one per key. The engine itself never
/// touches this store; it only receives and returns `Graph` values, and the
/// caller decides when a returned snapshot replaces the cached one.
///
/// Single-writer by construction: [`apply`](Self::apply) always reads the
/// *current* snapshot and replaces it in one step, so a mutation can never
/// be computed against a stale capture.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    snapshots: AHashMap<SnapshotKey, Graph>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot for `key`, if one was fetched.
    pub fn get(&self, key: &SnapshotKey) -> Option<&Graph> {
        self.snapshots.get(key)
    }

    /// Installs a snapshot, returning the one it replaced.
    pub fn replace(&mut self, key: SnapshotKey, graph: Graph) -> Option<Graph> {
        self.snapshots.insert(key, graph)
    }

    /// Drops the snapshot for `key`, returning it.
    pub fn remove(&mut self, key: &SnapshotKey) -> Option<Graph> {
        self.snapshots.remove(key)
    }

    /// Reducer step: runs [`set_mapping`] against the current snapshot for
    /// `key` and installs the result. Returns `false` when no snapshot
    /// exists for the key.
    pub fn apply(
        &mut self,
        key: &SnapshotKey,
        node_id: &str,
        field_key: &str,
        entry: Option<MappingEntry>,
    ) -> bool {
        let Some(current) = self.snapshots.get(key) else {
            return false;
        };
        let next = set_mapping(current, node_id, field_key, entry);
        self.snapshots.insert(key.clone(), next);
        true
    }

    /// Serializes all snapshots to JSON for session persistence.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let entries: Vec<(&SnapshotKey, &Graph)> = self.snapshots.iter().collect();
        serde_json::to_string(&entries)
    }

    /// Restores a store previously serialized with [`to_json`](Self::to_json).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<(SnapshotKey, Graph)> = serde_json::from_str(json)?;
        Ok(Self {
            snapshots: entries.into_iter().collect(),
        })
    }
}
