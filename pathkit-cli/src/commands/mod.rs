//! CLI command implementations.

mod completions;
mod expand;
mod join;
mod realize;
mod tidy;

pub use completions::CompletionsCommand;
pub use expand::ExpandCommand;
pub use join::JoinCommand;
pub use realize::RealizeCommand;
pub use tidy::TidyCommand;
