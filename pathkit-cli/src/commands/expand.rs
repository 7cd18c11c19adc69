//! Command to expand home-directory markers.

use crate::error::CliError;
use crate::utils::{parse_paths, print_paths, GlobalOptions};
use clap::Args;

/// Expand a leading `~` or `~user` into an absolute home path.
#[derive(Args)]
pub struct ExpandCommand {
    /// Paths to expand; the literal argument `NA` marks a missing element
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Emulate the Windows convention from environment variables
    #[arg(long)]
    pub windows: bool,

    /// Print results as a JSON array
    #[arg(long)]
    pub json: bool,
}

impl ExpandCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let paths = parse_paths(&self.paths);
        let expanded = pathkit::expand(&paths, self.windows)?;
        print_paths(&expanded, self.json)
    }
}
