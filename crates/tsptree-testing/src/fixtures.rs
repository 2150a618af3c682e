//! Fixtures for sample tree input.
//!
//! Provides:
//! - Short constructors for entries and descriptors
//! - Sample documents shaped like real trace-server responses

use tsptree_types::{Descriptor, Entry, ROOT_PARENT_ID, TreeDocument};

/// Single-label entry.
pub fn entry(id: i64, parent_id: i64, label: &str) -> Entry {
    Entry::new(id, parent_id, vec![label.to_string()])
}

/// Entry with one label per column.
pub fn row_entry(id: i64, parent_id: i64, labels: &[&str]) -> Entry {
    Entry::new(id, parent_id, labels.iter().map(|s| s.to_string()).collect())
}

pub fn descriptors(texts: &[&str]) -> Vec<Descriptor> {
    texts.iter().map(|t| Descriptor::new(*t)).collect()
}

/// `A` with child `B`, both single-label.
pub fn two_level() -> Vec<Entry> {
    vec![entry(1, ROOT_PARENT_ID, "A"), entry(2, 1, "B")]
}

/// Three entries where entry 2 names entry 3, which only appears after it.
pub fn forward_reference() -> Vec<Entry> {
    vec![
        entry(1, ROOT_PARENT_ID, "A"),
        entry(2, 3, "B"),
        entry(3, ROOT_PARENT_ID, "C"),
    ]
}

/// `len` entries, each the only child of the one before it.
pub fn chain(len: i64) -> Vec<Entry> {
    (0..len)
        .map(|i| entry(i, if i == 0 { ROOT_PARENT_ID } else { i - 1 }, "n"))
        .collect()
}

/// Kernel-style thread tree: two processes, nested threads, auxiliary fields.
pub fn thread_tree() -> Vec<Entry> {
    vec![
        entry(10, ROOT_PARENT_ID, "systemd").with_other("pid", 1),
        entry(11, 10, "journald").with_other("pid", 312),
        entry(12, 11, "worker").with_other("tid", 313),
        entry(13, 10, "sshd").with_other("pid", 540),
        entry(20, ROOT_PARENT_ID, "kthreadd").with_other("pid", 2),
    ]
}

/// Process table with `Process`, `TID` and `State` columns.
pub fn process_table() -> TreeDocument {
    TreeDocument::new(vec![
        row_entry(1, ROOT_PARENT_ID, &["init", "1", "S"]),
        row_entry(2, 1, &["bash", "204", "S"]),
        row_entry(3, 2, &["vim", "977", "R"]),
    ])
    .with_descriptors(descriptors(&["Process", "TID", "State"]))
    .with_trace("kernel")
}

/// Serialized form of `doc`, as the CLI reads it.
pub fn to_json(doc: &TreeDocument) -> String {
    serde_json::to_string_pretty(doc).expect("tree documents always serialize")
}
