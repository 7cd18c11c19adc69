//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, ExpandCommand, JoinCommand, RealizeCommand, TidyCommand,
};
use clap::{Parser, Subcommand};

/// Command-line tool for vectorized path-string manipulation.
#[derive(Parser)]
#[command(name = "pathkit")]
#[command(version, about = "Manipulate path strings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Join columns of path components into full paths
    Join(JoinCommand),

    /// Expand a leading ~ into the home directory
    Expand(ExpandCommand),

    /// Normalize separators and redundant segments
    Tidy(TidyCommand),

    /// Resolve paths to canonical absolute form
    Realize(RealizeCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
