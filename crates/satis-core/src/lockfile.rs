use serde::{Deserialize, Deserializer, Serialize};

use crate::package::ResolvedPackage;

/// A Composer lock file, reduced to the resolved package lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lockfile {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub packages: Vec<ResolvedPackage>,
    /// Absent or `null` when the lock was written without dev requirements.
    #[serde(default, rename = "packages-dev", deserialize_with = "null_as_empty")]
    pub packages_dev: Vec<ResolvedPackage>,
}

impl Lockfile {
    /// All resolved packages: `packages` first, then `packages-dev`, each in
    /// file order.
    pub fn resolved_packages(&self) -> impl Iterator<Item = &ResolvedPackage> {
        self.packages.iter().chain(self.packages_dev.iter())
    }

    pub fn len(&self) -> usize {
        self.packages.len() + self.packages_dev.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ResolvedPackage>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ResolvedPackage>>::deserialize(deserializer)?.unwrap_or_default())
}
