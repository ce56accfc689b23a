use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::require::RequirementMap;

const REQUIRE_KEY: &str = "require";

/// A satis.json document.
///
/// Only `require` is interpreted; every other field is carried through
/// untouched and keeps its position when the document is written back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SatisConfig {
    document: Map<String, Value>,
}

impl SatisConfig {
    /// Decode the `require` section. A missing or `null` section is an
    /// empty map.
    pub fn require(&self) -> Result<RequirementMap, serde_json::Error> {
        match self.document.get(REQUIRE_KEY) {
            None | Some(Value::Null) => Ok(RequirementMap::new()),
            Some(value) => RequirementMap::deserialize(value),
        }
    }

    /// Replace the `require` section, keeping its position if it already
    /// exists.
    pub fn set_require(&mut self, require: &RequirementMap) -> Result<(), serde_json::Error> {
        let value = serde_json::to_value(require)?;
        self.document.insert(REQUIRE_KEY.to_string(), value);
        Ok(())
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.document
    }
}
