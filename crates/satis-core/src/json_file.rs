//! Reading and writing JSON documents.
//!
//! Operations talk to a [`JsonStore`] rather than the filesystem so they can
//! be exercised against [`MemoryStore`] in tests.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use satis_util::errors::{SatisError, SatisResult};

/// A JSON document that can be read whole and written back whole.
pub trait JsonStore {
    /// Location used in messages.
    fn path(&self) -> &Path;

    fn read_value(&self) -> SatisResult<Value>;

    fn write_value(&mut self, value: &Value) -> SatisResult<()>;

    /// Read and decode the document into `T`.
    fn read<T: DeserializeOwned>(&self) -> SatisResult<T>
    where
        Self: Sized,
    {
        let value = self.read_value()?;
        serde_json::from_value(value).map_err(|e| {
            SatisError::Parse {
                path: self.path().to_path_buf(),
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Encode `data` and replace the document with it.
    fn write<T: Serialize>(&mut self, data: &T) -> SatisResult<()>
    where
        Self: Sized,
    {
        let value = serde_json::to_value(data).map_err(|e| SatisError::Generic {
            message: format!("Failed to encode {}: {e}", self.path().display()),
        })?;
        self.write_value(&value)
    }
}

/// A JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

impl JsonStore for JsonFile {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read_value(&self) -> SatisResult<Value> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SatisError::FileNotFound {
                    path: self.path.clone(),
                }
            } else {
                SatisError::Io(e)
            }
        })?;
        tracing::debug!("read {} ({} bytes)", self.path.display(), content.len());

        serde_json::from_str(&content).map_err(|e| {
            SatisError::Parse {
                path: self.path.clone(),
                message: e.to_string(),
            }
            .into()
        })
    }

    fn write_value(&mut self, value: &Value) -> SatisResult<()> {
        let content = to_pretty_string(value).map_err(|e| SatisError::Generic {
            message: format!("Failed to encode {}: {e}", self.path.display()),
        })?;
        satis_util::fs::write_atomic(&self.path, content.as_bytes()).map_err(SatisError::Io)?;
        tracing::debug!("wrote {}", self.path.display());
        Ok(())
    }
}

/// An in-memory document, for exercising operations without touching disk.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    path: PathBuf,
    value: Option<Value>,
    writes: usize,
}

impl MemoryStore {
    /// A store holding `value`, reported under `path` in errors.
    pub fn new(path: impl Into<PathBuf>, value: Value) -> Self {
        Self {
            path: path.into(),
            value: Some(value),
            writes: 0,
        }
    }

    /// A store whose document does not exist yet.
    pub fn missing(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            value: None,
            writes: 0,
        }
    }

    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl JsonStore for MemoryStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read_value(&self) -> SatisResult<Value> {
        self.value.clone().ok_or_else(|| {
            SatisError::FileNotFound {
                path: self.path.clone(),
            }
            .into()
        })
    }

    fn write_value(&mut self, value: &Value) -> SatisResult<()> {
        self.value = Some(value.clone());
        self.writes += 1;
        Ok(())
    }
}

/// Render `value` the way Composer writes its JSON files: four-space
/// indentation, unescaped slashes and unicode, trailing newline.
pub fn to_pretty_string<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
