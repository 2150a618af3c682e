// Engine module - tree assembly and rendering
// This layer sits between flat entries (types) and CLI presentation

mod item;
mod model;
mod print;
mod render;
mod snapshot;

pub use item::{INDENT_UNIT, NodeId, TreeItem, guide};
pub use model::TreeModel;
pub use print::{PrintMode, TablePreset, build_table, resolve_headers};
pub use render::{RenderEvent, RenderEvents, TreeLine, Walk, partition};
pub use snapshot::{NodeSnapshot, TreeSnapshot};

pub use comfy_table::Table;

use tsptree_types::{Descriptor, Entry};

// Façade API - Stable public interface for CLI layer

/// Build a tree from entries in input order.
pub fn build_tree(entries: Vec<Entry>, descriptors: Option<Vec<Descriptor>>) -> TreeModel {
    TreeModel::new(entries, descriptors)
}

/// Render a tree as indented text, one line per single-label entry.
pub fn render_text(model: &TreeModel) -> String {
    let mut out = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = model.print_as(&mut out, &PrintMode::Text, TablePreset::default());
    String::from_utf8_lossy(&out).into_owned()
}
