use crate::item::{NodeId, TreeItem};
use crate::render::{RenderEvents, Walk};
use std::collections::HashMap;
use tsptree_types::{Descriptor, Entry, ROOT_PARENT_ID, TreeDocument};

/// Tree assembled once from a flat list of parent-referencing entries.
///
/// Nodes live in an arena with the synthetic root at [`NodeId::ROOT`]. An entry
/// attaches to its parent only if that parent was registered earlier in the
/// input; otherwise it stays in the arena but is unreachable from the root.
#[derive(Debug, Clone)]
pub struct TreeModel {
    nodes: Vec<TreeItem>,
    index: HashMap<i64, NodeId>,
    /// Reachability from the root, indexed by arena position.
    reachable: Vec<bool>,
    descriptors: Option<Vec<Descriptor>>,
}

impl TreeModel {
    pub fn new(
        entries: impl IntoIterator<Item = Entry>,
        descriptors: Option<Vec<Descriptor>>,
    ) -> Self {
        let mut nodes = vec![TreeItem::root()];
        let mut reachable = vec![true];
        let mut index = HashMap::new();
        index.insert(ROOT_PARENT_ID, NodeId::ROOT);

        for entry in entries {
            let id = NodeId(nodes.len());
            // Resolve before registering, so an entry can never parent itself.
            let parent = index.get(&entry.parent_id).copied();
            index.insert(entry.id, id);

            let mut item = TreeItem::new(None);
            match parent {
                Some(parent) => {
                    tracing::trace!(id = entry.id, parent_id = entry.parent_id, "attached");
                    nodes[parent.0].add_child(id);
                    item.set_parent(parent);
                    // Parents always precede their children in the arena.
                    reachable.push(reachable[parent.0]);
                }
                None => {
                    reachable.push(false);
                    tracing::debug!(
                        id = entry.id,
                        parent_id = entry.parent_id,
                        "parent not registered yet, entry left out of the tree"
                    );
                }
            }
            item.set_entry(entry);
            nodes.push(item);
        }

        tracing::debug!(
            entries = nodes.len() - 1,
            top_level = nodes[0].children().len(),
            "tree built"
        );

        Self {
            nodes,
            index,
            reachable,
            descriptors,
        }
    }

    pub fn from_document(document: TreeDocument) -> Self {
        let model = Self::new(document.entries, document.descriptors);
        match document.trace {
            Some(trace) => model.with_trace(trace),
            None => model,
        }
    }

    /// Names the trace this tree was fetched from; stored on the root.
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.nodes[NodeId::ROOT.0].set_trace(trace);
        self
    }

    pub fn trace(&self) -> Option<&str> {
        self.root().trace()
    }

    pub fn root(&self) -> &TreeItem {
        &self.nodes[NodeId::ROOT.0]
    }

    pub fn node(&self, id: NodeId) -> Option<&TreeItem> {
        self.nodes.get(id.0)
    }

    /// Node most recently registered under entry id `entry_id`.
    pub fn get(&self, entry_id: i64) -> Option<NodeId> {
        self.index
            .get(&entry_id)
            .copied()
            .filter(|&id| id != NodeId::ROOT)
    }

    pub fn item(&self, entry_id: i64) -> Option<&TreeItem> {
        self.get(entry_id).and_then(|id| self.node(id))
    }

    pub fn descriptors(&self) -> Option<&[Descriptor]> {
        self.descriptors.as_deref()
    }

    /// Number of entries, reachable or not.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Node ids of all entries, in input order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (1..self.nodes.len()).map(NodeId)
    }

    pub fn is_reachable(&self, id: NodeId) -> bool {
        self.reachable.get(id.0).copied().unwrap_or(false)
    }

    /// Entries whose parent was not registered before them.
    pub fn orphans(&self) -> Vec<&Entry> {
        self.nodes
            .iter()
            .skip(1)
            .filter(|item| item.parent().is_none())
            .filter_map(TreeItem::entry)
            .collect()
    }

    /// Every entry not reachable from the root: orphans and their descendants.
    pub fn unreachable(&self) -> Vec<&Entry> {
        self.nodes
            .iter()
            .zip(&self.reachable)
            .filter(|(_, reachable)| !**reachable)
            .filter_map(|(item, _)| item.entry())
            .collect()
    }

    /// Walk the subtree under `id` (inclusive), starting at `depth`.
    pub fn render(&self, id: NodeId, depth: usize) -> RenderEvents<'_> {
        RenderEvents::new(Walk::new(self, &[id], depth))
    }

    /// Walk every top-level node in order, each starting at depth 0.
    pub fn events(&self) -> RenderEvents<'_> {
        RenderEvents::new(self.walk())
    }

    /// Reachable nodes in pre-order, paired with their render depth.
    pub fn walk(&self) -> Walk<'_> {
        Walk::new(self, self.root().children(), 0)
    }
}
