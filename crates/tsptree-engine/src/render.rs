use crate::item::{INDENT_UNIT, NodeId, TreeItem};
use crate::model::TreeModel;
use std::fmt;

/// One unit of rendered output.
///
/// Lines are meant to be written as they arrive; rows are meant to be
/// batched into a table by the consumer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    Line(TreeLine),
    Row(Vec<String>),
}

/// A single-label node: the hierarchy guide and the node text, kept apart so
/// presenters can style them separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub guide: String,
    pub text: String,
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.guide, self.text)
    }
}

/// Depth-first, pre-order walk yielding each node with its render depth.
///
/// Uses an explicit stack, so arbitrarily deep trees are fine.
pub struct Walk<'a> {
    model: &'a TreeModel,
    stack: Vec<(NodeId, usize)>,
}

impl<'a> Walk<'a> {
    pub(crate) fn new(model: &'a TreeModel, starts: &[NodeId], depth: usize) -> Self {
        let stack = starts.iter().rev().map(|&id| (id, depth)).collect();
        Self { model, stack }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (&'a TreeItem, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((id, depth)) = self.stack.pop() {
            let Some(item) = self.model.node(id) else {
                continue;
            };
            let child_depth = depth + INDENT_UNIT;
            self.stack
                .extend(item.children().iter().rev().map(|&c| (c, child_depth)));
            return Some((item, depth));
        }
        None
    }
}

/// Lazy render events over part of a [`TreeModel`], in walk order.
pub struct RenderEvents<'a> {
    walk: Walk<'a>,
}

impl<'a> RenderEvents<'a> {
    pub(crate) fn new(walk: Walk<'a>) -> Self {
        Self { walk }
    }
}

impl Iterator for RenderEvents<'_> {
    type Item = RenderEvent;

    fn next(&mut self) -> Option<Self::Item> {
        self.walk
            .by_ref()
            .find_map(|(item, depth)| item.render_self(depth))
    }
}

/// Split events into the lines and rows they carry, preserving order within each.
pub fn partition(events: impl IntoIterator<Item = RenderEvent>) -> (Vec<TreeLine>, Vec<Vec<String>>) {
    let mut lines = Vec::new();
    let mut rows = Vec::new();
    for event in events {
        match event {
            RenderEvent::Line(line) => lines.push(line),
            RenderEvent::Row(row) => rows.push(row),
        }
    }
    (lines, rows)
}
