use crate::core::{InputStore, Storage};
use crate::utils::error::{FortuneError, Result};
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

type Entries = BTreeMap<String, String>;

/// 1つの JSON オブジェクトファイルにキーと値を保存するストア
#[derive(Debug, Clone)]
pub struct JsonFileInputStore<S: Storage> {
    storage: S,
    file_name: String,
}

impl<S: Storage> JsonFileInputStore<S> {
    pub fn new(storage: S, file_name: impl Into<String>) -> Self {
        Self {
            storage,
            file_name: file_name.into(),
        }
    }

    async fn read_entries(&self) -> Result<Entries> {
        match self.storage.read_file(&self.file_name).await {
            Ok(bytes) => {
                if bytes.iter().all(|b| b.is_ascii_whitespace()) {
                    return Ok(Entries::new());
                }
                Ok(serde_json::from_slice(&bytes)?)
            }
            Err(FortuneError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(file = %self.file_name, "No saved inputs yet");
                Ok(Entries::new())
            }
            Err(e) => Err(e),
        }
    }

    async fn write_entries(&self, entries: &Entries) -> Result<()> {
        let data = serde_json::to_vec_pretty(entries)?;
        self.storage.write_file(&self.file_name, &data).await
    }
}

impl<S: Storage> InputStore for JsonFileInputStore<S> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.read_entries().await?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.read_entries().await?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries).await?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryInputStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryInputStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries.lock().map_err(|e| FortuneError::StoreError {
            message: format!("memory store lock poisoned: {}", e),
        })
    }
}

impl InputStore for MemoryInputStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}
