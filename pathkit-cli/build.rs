//! Build script for pathkit-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("pathkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manipulate path strings")
        .long_about("Command-line tool for vectorized path-string manipulation")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("join")
                .about("Join columns of path components into full paths")
                .long_about(
                    "Join comma-separated columns of components, recycling shorter columns",
                ),
            Command::new("expand")
                .about("Expand a leading ~ into the home directory")
                .long_about("Expand ~ and ~user prefixes, natively or emulating Windows"),
            Command::new("tidy")
                .about("Normalize separators and redundant segments")
                .long_about("Lexically clean paths without touching the filesystem"),
            Command::new("realize")
                .about("Resolve paths to canonical absolute form")
                .long_about("Resolve each path through the operating system, following symlinks"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("pathkit.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
