use crate::render::{RenderEvent, TreeLine};
use serde::Serialize;
use tsptree_types::Entry;

/// Depth added per tree level when rendering.
pub const INDENT_UNIT: usize = 2;

/// Index of a node inside a [`crate::TreeModel`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The synthetic root is always the first node of the arena.
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// A tree node wrapping zero or one entry.
///
/// Children are owned by index; the parent link is a plain back-reference
/// into the same arena.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeItem {
    entry: Option<Entry>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    trace: Option<String>,
}

impl TreeItem {
    pub fn new(entry: Option<Entry>) -> Self {
        Self {
            entry,
            ..Self::default()
        }
    }

    /// Entry-less sentinel anchoring all top-level entries.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn set_parent(&mut self, parent: NodeId) {
        self.parent = Some(parent);
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn add_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn set_entry(&mut self, entry: Entry) {
        self.entry = Some(entry);
    }

    pub fn entry(&self) -> Option<&Entry> {
        self.entry.as_ref()
    }

    pub fn set_trace(&mut self, trace: impl Into<String>) {
        self.trace = Some(trace.into());
    }

    pub fn trace(&self) -> Option<&str> {
        self.trace.as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.entry.is_none()
    }

    /// Event produced by this node alone at `depth`; children are not visited.
    ///
    /// Single-label entries become a [`RenderEvent::Line`], multi-label entries
    /// a [`RenderEvent::Row`]. The root and label-less entries produce nothing.
    pub fn render_self(&self, depth: usize) -> Option<RenderEvent> {
        let entry = self.entry.as_ref()?;
        match entry.labels.as_slice() {
            [] => None,
            [label] => Some(RenderEvent::Line(TreeLine {
                guide: guide(depth),
                text: format!(
                    "{label} ({label}, {}) {} {}",
                    entry.id,
                    entry.parent_id,
                    entry.others_display()
                ),
            })),
            [first, rest @ ..] => {
                let mut cells = Vec::with_capacity(rest.len() + 1);
                cells.push(format!("{}{}", guide(depth), first));
                cells.extend(rest.iter().cloned());
                Some(RenderEvent::Row(cells))
            }
        }
    }
}

/// Indentation and connector drawn in front of a node at `depth`.
///
/// `"  "` for any nested node, one `"| "` per level beyond the first, then the
/// `"|____"` connector. Top-level nodes get an empty guide.
pub fn guide(depth: usize) -> String {
    if depth == 0 {
        return String::new();
    }
    let bars = (depth / INDENT_UNIT).saturating_sub(1);
    format!("  {}|____", "| ".repeat(bars))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(labels: &[&str]) -> Entry {
        Entry::new(3, 1, labels.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_guide_by_depth() {
        assert_eq!(guide(0), "");
        assert_eq!(guide(1), "  |____");
        assert_eq!(guide(2), "  |____");
        assert_eq!(guide(4), "  | |____");
        assert_eq!(guide(6), "  | | |____");
    }

    #[test]
    fn test_root_renders_nothing() {
        assert_eq!(TreeItem::root().render_self(0), None);
        assert!(TreeItem::root().is_root());
    }

    #[test]
    fn test_single_label_line_format() {
        let item = TreeItem::new(Some(entry(&["B"]).with_other("tid", 12)));
        let Some(RenderEvent::Line(line)) = item.render_self(2) else {
            panic!("expected a line");
        };
        assert_eq!(line.guide, "  |____");
        assert_eq!(line.text, "B (B, 3) 1  (tid, 12)");
        assert_eq!(line.to_string(), "  |____B (B, 3) 1  (tid, 12)");
    }

    #[test]
    fn test_single_label_without_others_keeps_separator() {
        let item = TreeItem::new(Some(Entry::new(1, -1, vec!["A".to_string()])));
        let Some(RenderEvent::Line(line)) = item.render_self(0) else {
            panic!("expected a line");
        };
        assert_eq!(line.to_string(), "A (A, 1) -1 ");
    }

    #[test]
    fn test_multi_label_row_prefixes_first_cell_only() {
        let item = TreeItem::new(Some(entry(&["bash", "42", "running"])));
        assert_eq!(
            item.render_self(4),
            Some(RenderEvent::Row(vec![
                "  | |____bash".to_string(),
                "42".to_string(),
                "running".to_string(),
            ]))
        );
    }

    #[test]
    fn test_label_less_entry_renders_nothing() {
        let item = TreeItem::new(Some(entry(&[])));
        assert_eq!(item.render_self(2), None);
    }

    #[test]
    fn test_parent_last_call_wins_and_children_keep_order() {
        let mut item = TreeItem::root();
        item.set_parent(NodeId(4));
        item.set_parent(NodeId(2));
        item.add_child(NodeId(9));
        item.add_child(NodeId(5));

        assert_eq!(item.parent(), Some(NodeId(2)));
        assert_eq!(item.children(), &[NodeId(9), NodeId(5)]);
    }

    #[test]
    fn test_set_entry_and_trace() {
        let mut item = TreeItem::root();
        item.set_trace("ust-trace");
        item.set_entry(entry(&["X"]));
        assert_eq!(item.trace(), Some("ust-trace"));
        assert_eq!(item.entry().map(|e| e.id), Some(3));
        assert!(!item.is_root());
    }
}
