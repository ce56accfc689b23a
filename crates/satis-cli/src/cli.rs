//! CLI argument definitions for satis.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "satis",
    version,
    about = "Maintain the require section of a satis.json",
    long_about = "Tools for a satis repository configuration. Use `import` to pin the \
                  packages of a composer.lock into satis.json before running a build."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add repository URL to satis JSON file
    #[command(long_about = "The import command imports the packages of the given lock file \
                            into the json file (satis.json is used by default). You will need \
                            to run the build command to fetch updates from the repository.")]
    Import {
        /// Lock file to use
        lock: PathBuf,
        /// JSON file to use
        #[arg(default_value = satis_core::DEFAULT_SATIS_FILE)]
        file: PathBuf,
        /// Print the resulting require section instead of writing the file
        #[arg(long)]
        dry_run: bool,
    },
}

/// Parse CLI arguments from `std::env::args`.
pub fn parse() -> Cli {
    Cli::parse()
}
