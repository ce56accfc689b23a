//! Operation: import locked package versions into a satis.json `require`.

use std::path::PathBuf;

use satis_core::json_file::{JsonFile, JsonStore};
use satis_core::lockfile::Lockfile;
use satis_core::manifest::SatisConfig;
use satis_core::require::{merge_with_report, MergeOutcome, RequirementMap};
use satis_util::errors::SatisError;

/// Options for `satis import`.
#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Lock file to read resolved packages from.
    pub lock: PathBuf,
    /// satis.json to update.
    pub file: PathBuf,
    /// Compute the result without writing it.
    pub dry_run: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            lock: PathBuf::from("composer.lock"),
            file: PathBuf::from(satis_core::DEFAULT_SATIS_FILE),
            dry_run: false,
        }
    }
}

/// What an import did.
#[derive(Debug, Clone, Default)]
pub struct ImportSummary {
    /// Packages newly added to `require`.
    pub added: usize,
    /// Packages whose constraint gained a version.
    pub extended: usize,
    /// Packages whose version was already required.
    pub unchanged: usize,
    /// Lock records with an empty version.
    pub skipped: usize,
    /// The `require` section after the merge.
    pub require: RequirementMap,
    /// Whether the manifest was written back.
    pub written: bool,
}

impl ImportSummary {
    /// Number of lock records processed.
    pub fn total(&self) -> usize {
        self.added + self.extended + self.unchanged + self.skipped
    }

    /// Whether the `require` section differs from what was on disk.
    pub fn changed(&self) -> bool {
        self.added + self.extended > 0
    }
}

/// Import every package from the lock file into the satis.json `require`.
pub fn import(opts: &ImportOptions) -> miette::Result<ImportSummary> {
    let lock = JsonFile::new(&opts.lock);
    let mut manifest = JsonFile::new(&opts.file);
    import_with(&lock, &mut manifest, opts.dry_run)
}

/// Import using explicit stores for the lock file and the satis.json.
pub fn import_with<L, M>(lock: &L, manifest: &mut M, dry_run: bool) -> miette::Result<ImportSummary>
where
    L: JsonStore,
    M: JsonStore,
{
    let lockfile: Lockfile = lock.read()?;
    tracing::debug!(
        "{}: {} packages, {} dev packages",
        lock.path().display(),
        lockfile.packages.len(),
        lockfile.packages_dev.len()
    );

    let mut config: SatisConfig = manifest.read()?;
    let mut require = config.require().map_err(|e| SatisError::Parse {
        path: manifest.path().to_path_buf(),
        message: format!("invalid \"require\" section: {e}"),
    })?;
    tracing::debug!(
        "{}: {} existing requirements",
        manifest.path().display(),
        require.len()
    );

    let mut summary = ImportSummary::default();
    for entry in merge_with_report(&mut require, lockfile.resolved_packages()) {
        match entry.outcome {
            MergeOutcome::Added => summary.added += 1,
            MergeOutcome::Extended => summary.extended += 1,
            MergeOutcome::Unchanged => summary.unchanged += 1,
            MergeOutcome::Skipped => {
                tracing::warn!(
                    "Skipping {} from {}: no version",
                    entry.key,
                    lock.path().display()
                );
                summary.skipped += 1;
            }
        }
    }

    if dry_run {
        tracing::debug!("dry run, not writing {}", manifest.path().display());
    } else {
        config.set_require(&require).map_err(|e| SatisError::Generic {
            message: format!("Failed to encode \"require\" section: {e}"),
        })?;
        manifest.write(&config)?;
        summary.written = true;
    }

    summary.require = require;
    Ok(summary)
}
