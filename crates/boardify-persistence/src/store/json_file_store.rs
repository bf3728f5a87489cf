use crate::store::atomic_writer::AtomicWriter;
use crate::traits::CredentialStore;
use boardify_core::{BoardifyError, BoardifyResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

type Entries = BTreeMap<String, String>;

/// Credential store backed by a single JSON object file.
///
/// The file is created on the first `set` and rewritten atomically on every
/// change. Writes within one process are serialized; across processes the last
/// writer wins.
#[derive(Debug)]
pub struct JsonFileCredentialStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileCredentialStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> BoardifyResult<Entries> {
        match AtomicWriter::read_if_exists(&self.path).await? {
            Some(bytes) if !bytes.is_empty() => serde_json::from_slice(&bytes).map_err(|e| {
                BoardifyError::Storage(format!(
                    "corrupt credentials file {}: {}",
                    self.path.display(),
                    e
                ))
            }),
            _ => Ok(Entries::new()),
        }
    }

    /// Entries to modify. A corrupt file is discarded instead of blocking writes.
    async fn read_entries_for_write(&self) -> BoardifyResult<Entries> {
        match self.read_entries().await {
            Err(BoardifyError::Storage(reason)) => {
                tracing::warn!("{}; starting from an empty store", reason);
                Ok(Entries::new())
            }
            other => other,
        }
    }

    async fn write_entries(&self, entries: &Entries) -> BoardifyResult<()> {
        let bytes = serde_json::to_vec_pretty(entries)
            .map_err(|e| BoardifyError::Serialization(e.to_string()))?;
        AtomicWriter::write_atomic(&self.path, &bytes).await
    }
}

#[async_trait::async_trait]
impl CredentialStore for JsonFileCredentialStore {
    async fn get(&self, key: &str) -> BoardifyResult<Option<String>> {
        let mut entries = self.read_entries().await?;
        Ok(entries.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> BoardifyResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries_for_write().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await?;

        tracing::debug!("Stored '{}' in {}", key, self.path.display());
        Ok(())
    }

    async fn remove(&self, key: &str) -> BoardifyResult<()> {
        let _guard = self.write_lock.lock().await;
        if !self.path.exists() {
            return Ok(());
        }

        let mut entries = self.read_entries_for_write().await?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries).await?;
            tracing::debug!("Removed '{}' from {}", key, self.path.display());
        }
        Ok(())
    }
}
