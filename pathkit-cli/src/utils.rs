//! Utility functions for CLI operations.
//!
//! This module provides the helpers shared across commands: translating
//! between shell arguments and nullable path vectors, and writing results as
//! lines or JSON.

use std::io::{self, Write};

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields drive logging setup in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Token denoting a missing element in command input and line output.
pub const NA_TOKEN: &str = "NA";

/// Parse a comma-separated column of components, mapping `NA` to missing.
pub fn parse_column(spec: &str) -> Vec<Option<String>> {
    spec.split(',')
        .map(|part| {
            if part == NA_TOKEN {
                None
            } else {
                Some(part.to_string())
            }
        })
        .collect()
}

/// Convert plain path arguments into nullable elements, mapping `NA` to
/// missing.
pub fn parse_paths(args: &[String]) -> Vec<Option<String>> {
    args.iter()
        .map(|arg| {
            if arg == NA_TOKEN {
                None
            } else {
                Some(arg.clone())
            }
        })
        .collect()
}

/// Print results, one per line with `NA` for missing, or as a JSON array
/// where missing is `null`.
pub fn print_paths(paths: &[Option<String>], json: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        let encoded = serde_json::to_string(paths)?;
        writeln!(out, "{encoded}")?;
    } else {
        for path in paths {
            match path {
                Some(path) => writeln!(out, "{path}")?,
                None => writeln!(out, "{NA_TOKEN}")?,
            }
        }
    }
    Ok(())
}
