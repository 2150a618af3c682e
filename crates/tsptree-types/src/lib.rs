// Types layer - what the tree is built from
// Entries and descriptors arrive already fetched from a trace server; this crate
// only knows their shape and how to read them off disk.

pub mod document;
pub mod entry;
pub mod error;

pub use document::TreeDocument;
pub use entry::{Descriptor, Entry, ROOT_PARENT_ID};
pub use error::{Error, Result};
