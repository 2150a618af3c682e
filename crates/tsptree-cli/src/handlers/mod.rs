mod context;

pub mod check;
pub mod show;

pub use context::HandlerContext;
