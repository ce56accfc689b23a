use serde::{Deserialize, Serialize};

/// A package pinned to an exact version by a lock file.
///
/// Lock records carry many more fields (source, dist, autoload, ...);
/// only the name and version are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPackage {
    pub name: String,
    pub version: String,
}

impl ResolvedPackage {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// The key this package is stored under in a requirement map.
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
