// NOTE: tsptree Rationale
//
// Why build once, print many?
// - Entries come from a trace server that has already done the expensive work
// - The tree is assembled in a single pass over the input, in input order
// - Printing is a read-only walk, so the same model can back text, table and JSON output
//
// Why keep forward-referenced entries out of the tree (not two-pass linking)?
// - Trace servers emit parents before children; a late parent means the input is damaged
// - Reordering would hide that; `tsptree check` reports such entries instead

mod args;
mod commands;
pub mod config;
pub mod error;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
