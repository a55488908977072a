//! Command-line mode.

mod args;
mod context;
pub mod prompts;

pub use args::Args;
pub use context::Context;
