//! The `require` section of a satis.json and the merge that folds resolved
//! package versions into it.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::constraint::VersionConstraint;
use crate::package::ResolvedPackage;

/// Package name to version constraint, in file order.
///
/// Keys written by [`merge`] are lowercase package names. Keys loaded from a
/// file are kept exactly as found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequirementMap {
    entries: IndexMap<String, VersionConstraint>,
}

impl RequirementMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&VersionConstraint> {
        self.entries.get(name)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Insert or replace a constraint. New keys are appended at the end.
    pub fn insert(&mut self, name: impl Into<String>, constraint: VersionConstraint) {
        self.entries.insert(name.into(), constraint);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &VersionConstraint)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }
}

impl<K: Into<String>, V: Into<VersionConstraint>> FromIterator<(K, V)> for RequirementMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// What happened to a single package during a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The package was not required before and now is.
    Added,
    /// The version was appended to an existing constraint.
    Extended,
    /// The version was already part of the constraint.
    Unchanged,
    /// The package has an empty version and contributed nothing.
    Skipped,
}

/// Per-package record produced by [`merge_with_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeEntry {
    pub key: String,
    pub outcome: MergeOutcome,
}

/// Fold each package's version into `requirement`, in input order.
///
/// Package names are lowercased before lookup. A version already present in
/// the constraint is a no-op. This never fails and never removes a key or a
/// token.
pub fn merge<'a, I>(mut requirement: RequirementMap, packages: I) -> RequirementMap
where
    I: IntoIterator<Item = &'a ResolvedPackage>,
{
    merge_with_report(&mut requirement, packages);
    requirement
}

/// Like [`merge`], but works in place and reports what happened to each
/// package.
pub fn merge_with_report<'a, I>(requirement: &mut RequirementMap, packages: I) -> Vec<MergeEntry>
where
    I: IntoIterator<Item = &'a ResolvedPackage>,
{
    packages
        .into_iter()
        .map(|package| {
            let key = package.key();
            let outcome = fold(requirement, &key, &package.version);
            MergeEntry { key, outcome }
        })
        .collect()
}

fn fold(requirement: &mut RequirementMap, key: &str, version: &str) -> MergeOutcome {
    if version.is_empty() {
        return MergeOutcome::Skipped;
    }

    match requirement.entries.get_mut(key) {
        Some(constraint) => {
            if constraint.insert(version) {
                MergeOutcome::Extended
            } else {
                MergeOutcome::Unchanged
            }
        }
        None => {
            requirement.insert(key, VersionConstraint::parse(version));
            MergeOutcome::Added
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_into_empty_constraint_does_not_leave_separator() {
        let mut req: RequirementMap = [("a/a", "")].into_iter().collect();
        assert_eq!(fold(&mut req, "a/a", "1.0"), MergeOutcome::Extended);
        assert_eq!(req.get("a/a").unwrap().to_string(), "1.0");
    }

    #[test]
    fn fold_empty_version_is_skipped() {
        let mut req = RequirementMap::new();
        assert_eq!(fold(&mut req, "a/a", ""), MergeOutcome::Skipped);
        assert!(req.is_empty());
    }
}
