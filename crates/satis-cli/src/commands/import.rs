//! Handler for `satis import`.

use std::path::PathBuf;

use miette::Result;

use satis_core::json_file::to_pretty_string;
use satis_ops::ops_import::{self, ImportOptions};
use satis_util::errors::SatisError;

pub fn exec(lock: PathBuf, file: PathBuf, dry_run: bool) -> Result<()> {
    let opts = ImportOptions {
        lock,
        file,
        dry_run,
    };

    tracing::debug!(
        "importing {} into {}",
        opts.lock.display(),
        opts.file.display()
    );
    let summary = ops_import::import(&opts)?;

    if dry_run {
        let rendered = to_pretty_string(&summary.require).map_err(|e| SatisError::Generic {
            message: format!("Failed to encode require section: {e}"),
        })?;
        print!("{rendered}");
        return Ok(());
    }

    eprintln!(
        "Imported {} packages into {} ({} added, {} updated, {} unchanged)",
        summary.total(),
        opts.file.display(),
        summary.added,
        summary.extended,
        summary.unchanged
    );
    if summary.skipped > 0 {
        eprintln!("Skipped {} packages without a version", summary.skipped);
    }

    Ok(())
}
