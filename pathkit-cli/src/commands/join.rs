//! Command to join columns of path components.

use crate::error::CliError;
use crate::utils::{parse_column, print_paths, GlobalOptions};
use clap::Args;

/// Join columns of path components into full paths.
///
/// Each COLUMN argument is one comma-separated column; shorter columns are
/// recycled against the longest one. The literal element `NA` marks a
/// missing component, which makes its whole row missing.
#[derive(Args)]
pub struct JoinCommand {
    /// Columns of components, one comma-separated list per argument
    #[arg(value_name = "COLUMN", required = true)]
    pub columns: Vec<String>,

    /// Extension appended to each joined path
    #[arg(long, value_name = "EXT", default_value = "")]
    pub ext: String,

    /// Print results as a JSON array
    #[arg(long)]
    pub json: bool,
}

impl JoinCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let columns: Vec<Vec<Option<String>>> =
            self.columns.iter().map(|spec| parse_column(spec)).collect();

        let joined = pathkit::join(&columns, &self.ext)?;
        print_paths(&joined, self.json)
    }
}
