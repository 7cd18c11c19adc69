//! Command to resolve paths to canonical absolute form.

use crate::error::CliError;
use crate::utils::{print_paths, GlobalOptions};
use clap::Args;

/// Resolve each path to its canonical absolute form on disk.
///
/// Every path must exist; the first failure aborts the whole command.
#[derive(Args)]
pub struct RealizeCommand {
    /// Paths to realize
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Print results as a JSON array
    #[arg(long)]
    pub json: bool,
}

impl RealizeCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let realized = pathkit::realize(&self.paths)?;
        let realized: Vec<Option<String>> = realized.into_iter().map(Some).collect();
        print_paths(&realized, self.json)
    }
}
