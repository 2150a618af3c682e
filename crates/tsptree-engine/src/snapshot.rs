use crate::item::INDENT_UNIT;
use crate::model::TreeModel;
use serde::Serialize;
use serde_json::{Map, Value};

/// Serializable view of the reachable tree.
///
/// Nodes are listed flat, in the same pre-order as the printed tree; `depth`
/// and `parent_id` carry the hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<String>>,
    pub nodes: Vec<NodeSnapshot>,
    /// Ids of entries whose parent was not registered before them.
    pub orphans: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSnapshot {
    pub id: i64,
    pub parent_id: i64,
    /// 0 for top-level nodes.
    pub depth: usize,
    pub labels: Vec<String>,
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub others: Map<String, Value>,
}

impl TreeModel {
    pub fn snapshot(&self) -> TreeSnapshot {
        let nodes = self
            .walk()
            .filter_map(|(item, depth)| {
                let entry = item.entry()?;
                Some(NodeSnapshot {
                    id: entry.id,
                    parent_id: entry.parent_id,
                    depth: depth / INDENT_UNIT,
                    labels: entry.labels.clone(),
                    others: entry.others.clone(),
                })
            })
            .collect();

        TreeSnapshot {
            trace: self.trace().map(str::to_string),
            headers: self
                .descriptors()
                .map(|ds| ds.iter().map(|d| d.text.clone()).collect()),
            nodes,
            orphans: self.orphans().iter().map(|e| e.id).collect(),
        }
    }
}
