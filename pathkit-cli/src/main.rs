//! Main entry point for the pathkit CLI.
//!
//! This is the command-line interface for the pathkit path-string
//! operations:
//! - `join`: join columns of path components into full paths
//! - `expand`: expand a leading `~` into the home directory
//! - `tidy`: normalize separators and redundant segments
//! - `realize`: resolve paths to canonical absolute form

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let _level = pathkit::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    let result = match cli.command {
        cli::Command::Join(cmd) => cmd.execute(&global),
        cli::Command::Expand(cmd) => cmd.execute(&global),
        cli::Command::Tidy(cmd) => cmd.execute(&global),
        cli::Command::Realize(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
