use crate::errors::StoreError;
use crate::models::{JournalEntry, MoodEntry};
use serde::{Serialize, de::DeserializeOwned};
use std::{
    collections::HashMap,
    future::Future,
    path::PathBuf,
};
use tokio::{fs, sync::RwLock};
use tracing::debug;

pub const MOOD_ENTRIES_KEY: &str = "moodEntries";
pub const JOURNAL_ENTRIES_KEY: &str = "journalEntries";

/// String-keyed document storage backing the entry store.
pub trait StorageBackend: Send + Sync {
    /// Returns `None` when nothing has been stored under `key` yet.
    fn get_item(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;

    fn set_item(
        &self,
        key: &str,
        value: String,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// Keeps each key in its own `<key>.json` file under one directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            key: key.to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).await.map_err(io_err)?;
        fs::write(self.path_for(key), value).await.map_err(io_err)?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.items.write().await.insert(key.to_string(), value);
        Ok(())
    }
}

/// Owns the mood and journal collections. Every write rewrites the whole
/// collection; callers serialize access when requests can overlap.
#[derive(Debug)]
pub struct EntryStore<S> {
    backend: S,
}

impl<S: StorageBackend> EntryStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub async fn mood_entries(&self) -> Result<Vec<MoodEntry>, StoreError> {
        self.read_collection(MOOD_ENTRIES_KEY).await
    }

    pub async fn append_mood(&self, entry: MoodEntry) -> Result<(), StoreError> {
        let mut entries = self.mood_entries().await?;
        entries.push(entry);
        self.write_collection(MOOD_ENTRIES_KEY, &entries).await
    }

    pub async fn journal_entries(&self) -> Result<Vec<JournalEntry>, StoreError> {
        self.read_collection(JOURNAL_ENTRIES_KEY).await
    }

    pub async fn append_journal(&self, entry: JournalEntry) -> Result<(), StoreError> {
        let mut entries = self.journal_entries().await?;
        entries.push(entry);
        self.write_collection(JOURNAL_ENTRIES_KEY, &entries).await
    }

    /// Replaces the journal entry with the given id, keeping that id.
    /// Returns `false` and writes nothing when no entry matches.
    pub async fn update_journal(
        &self,
        id: &str,
        mut replacement: JournalEntry,
    ) -> Result<bool, StoreError> {
        let mut entries = self.journal_entries().await?;
        let Some(slot) = entries.iter_mut().find(|entry| entry.id == id) else {
            return Ok(false);
        };
        replacement.id = slot.id.clone();
        *slot = replacement;
        self.write_collection(JOURNAL_ENTRIES_KEY, &entries).await?;
        Ok(true)
    }

    async fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        match self.backend.get_item(key).await? {
            Some(raw) if !raw.trim().is_empty() => {
                serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                    key: key.to_string(),
                    source,
                })
            }
            _ => Ok(Vec::new()),
        }
    }

    async fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StoreError> {
        let payload = serde_json::to_string_pretty(items)?;
        self.backend.set_item(key, payload).await?;
        debug!(key, count = items.len(), "collection written");
        Ok(())
    }
}
