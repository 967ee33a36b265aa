//! Key-value persistence for history, palettes and preferences.
//!
//! The store is a best-effort blob store: each key is read and written
//! independently, and the last write to a key wins. There is no
//! atomicity across keys.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Minimal key-value interface the session persists through.
pub trait KeyValueStore {
    /// Returns the value stored under `key`, or `None` if the key is absent.
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: Value) -> Result<()>;
}

/// Reads `key` and deserializes it into `T`.
pub fn load_value<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>> {
    match store.get(key)? {
        Some(value) => {
            let parsed = serde_json::from_value(value)
                .with_context(|| format!("Stored value for '{key}' has an unexpected shape"))?;
            Ok(Some(parsed))
        }
        None => Ok(None),
    }
}

/// Reads the array under `key` one element at a time.
///
/// Elements that do not deserialize into `T` are dropped; the second value
/// counts them. A value that is not an array at all is an error.
pub fn load_entries<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<(Vec<T>, usize)>> {
    let Some(value) = store.get(key)? else {
        return Ok(None);
    };
    let Value::Array(items) = value else {
        anyhow::bail!("Stored value for '{key}' is not a list");
    };

    let total = items.len();
    let entries: Vec<T> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();
    let skipped = total - entries.len();
    Ok(Some((entries, skipped)))
}

/// Serializes `value` and writes it under `key`.
pub fn save_value<T: Serialize>(store: &mut dyn KeyValueStore, key: &str, value: &T) -> Result<()> {
    let json = serde_json::to_value(value)
        .with_context(|| format!("Failed to serialize value for '{key}'"))?;
    store.set(key, json)
}

/// In-memory store, used in tests and for throwaway sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, Value>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store backed by a single JSON object on disk.
///
/// Every call re-reads the file so separate invocations see each other's
/// writes. Writes go through a temp file + rename.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store at `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read data file: {}", self.path.display()))?;

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        let parsed: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse data file: {}", self.path.display()))?;

        match parsed {
            Value::Object(map) => Ok(map),
            _ => anyhow::bail!(
                "Data file {} does not contain a JSON object",
                self.path.display()
            ),
        }
    }

    fn write_all(&self, map: &Map<String, Value>) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir).with_context(|| {
                    format!("Failed to create data directory: {}", dir.display())
                })?;
            }
        }

        let content =
            serde_json::to_string_pretty(map).context("Failed to serialize data file")?;
        let temp_path = self.path.with_extension("json.tmp");

        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp data file: {}", temp_path.display())
        })?;
        fs::rename(&temp_path, &self.path).with_context(|| {
            format!("Failed to rename temp data file to: {}", self.path.display())
        })?;

        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        let mut map = self.read_all()?;
        map.insert(key.to_string(), value);
        self.write_all(&map)?;
        tracing::debug!(key, path = %self.path.display(), "stored value");
        Ok(())
    }
}
