//! Command to lexically normalize paths.

use crate::error::CliError;
use crate::utils::{parse_paths, print_paths, GlobalOptions};
use clap::Args;

/// Normalize separators and redundant segments without touching the
/// filesystem.
#[derive(Args)]
pub struct TidyCommand {
    /// Paths to tidy; the literal argument `NA` marks a missing element
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Print results as a JSON array
    #[arg(long)]
    pub json: bool,
}

impl TidyCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let paths = parse_paths(&self.paths);
        let tidied = pathkit::tidy(&paths);
        print_paths(&tidied, self.json)
    }
}
