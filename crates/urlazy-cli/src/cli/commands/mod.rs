//! CLI command handlers, one per file.

mod build;
mod parse;

pub use build::run_build;
pub use parse::run_parse;

