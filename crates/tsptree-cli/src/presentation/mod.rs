// Presentation layer - consumers of the engine's render events
// Report views implement Display; TreeView streams to a writer.

mod check;
mod guidance;
mod tree;

pub use check::{CheckReport, CheckView, OrphanEntry};
pub use guidance::GuidanceView;
pub use tree::TreeView;
