//! `StateStore` implementations: a JSON file for the CLI and an in-memory
//! map for tests.
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use curate_core::traits::StateStore;
use curate_core::{Error, Result};

/// Stores `{ namespace: { key: value } }` in one pretty-printed JSON file.
pub struct JsonFileStateStore {
    path: PathBuf,
    write_lock: tokio::sync::Mutex<()>,
}

impl JsonFileStateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Map<String, Value>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) if raw.trim().is_empty() => Ok(Map::new()),
            Ok(raw) => match serde_json::from_str::<Value>(&raw)? {
                Value::Object(map) => Ok(map),
                _ => Err(Error::Store(format!(
                    "{} does not hold a JSON object",
                    self.path.display()
                ))),
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl StateStore for JsonFileStateStore {
    async fn get(&self, namespace: &str, key: &str) -> Result<Option<Value>> {
        let root = self.load().await?;
        Ok(root.get(namespace).and_then(|ns| ns.get(key)).cloned())
    }

    async fn set(&self, namespace: &str, key: &str, value: Value) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut root = self.load().await?;
        let ns = root
            .entry(namespace.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        match ns {
            Value::Object(map) => {
                map.insert(key.to_string(), value);
            }
            _ => {
                return Err(Error::Store(format!(
                    "namespace '{}' is not an object",
                    namespace
                )))
            }
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, serde_json::to_vec_pretty(&Value::Object(root))?)
            .await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryStateStore {
    entries: Mutex<HashMap<(String, String), Value>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StateStore for MemoryStateStore {
    async fn get(&self, namespace: &str, key: &str) -> Result<Option<Value>> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| Error::Store(e.to_string()))?;
        let key = (namespace.to_string(), key.to_string());
        Ok(entries.get(&key).cloned())
    }

    async fn set(&self, namespace: &str, key: &str, value: Value) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| Error::Store(e.to_string()))?;
        entries.insert((namespace.to_string(), key.to_string()), value);
        Ok(())
    }
}
