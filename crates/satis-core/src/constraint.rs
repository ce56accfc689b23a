use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Separator between alternatives in a serialized constraint.
pub const ALTERNATIVE_SEPARATOR: char = '|';

/// A set of version tokens joined by logical OR.
///
/// Tokens keep the order in which they were first seen and never repeat.
/// The string a constraint was parsed from is kept verbatim and written back
/// unchanged until a new token is inserted; only then is the constraint
/// re-rendered from its tokens.
#[derive(Debug, Clone, Default)]
pub struct VersionConstraint {
    tokens: Vec<String>,
    raw: Option<String>,
}

impl VersionConstraint {
    /// An empty constraint with no alternatives.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `|`-separated constraint string.
    ///
    /// `""` yields an empty constraint. Otherwise every piece between
    /// separators is a token, including the empty piece inside `||`, and
    /// duplicates keep their first position.
    pub fn parse(s: &str) -> Self {
        let mut tokens: Vec<String> = Vec::new();
        if !s.is_empty() {
            for token in s.split(ALTERNATIVE_SEPARATOR) {
                if !tokens.iter().any(|t| t == token) {
                    tokens.push(token.to_string());
                }
            }
        }
        Self {
            tokens,
            raw: Some(s.to_string()),
        }
    }

    /// Append `token` unless it is empty or already present.
    ///
    /// Returns `true` if the token was added.
    pub fn insert(&mut self, token: &str) -> bool {
        if token.is_empty() || self.contains(token) {
            return false;
        }
        self.tokens.push(token.to_string());
        self.raw = None;
        true
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The serialized form: the parsed string if untouched, else the tokens
    /// joined by `|`.
    pub fn as_str(&self) -> Cow<'_, str> {
        match &self.raw {
            Some(raw) => Cow::Borrowed(raw),
            None => {
                let separator = ALTERNATIVE_SEPARATOR.to_string();
                Cow::Owned(self.tokens.join(separator.as_str()))
            }
        }
    }
}

impl PartialEq for VersionConstraint {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for VersionConstraint {}

impl fmt::Display for VersionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str())
    }
}

impl From<&str> for VersionConstraint {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl Serialize for VersionConstraint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_str())
    }
}

impl<'de> Deserialize<'de> for VersionConstraint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}
