//! Command dispatch and handler modules.

mod import;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Import {
            lock,
            file,
            dry_run,
        } => import::exec(lock, file, dry_run),
    }
}
