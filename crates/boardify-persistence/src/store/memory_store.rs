use crate::traits::CredentialStore;
use boardify_core::BoardifyResult;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Process-local store. Nothing outlives the process.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get(&self, key: &str) -> BoardifyResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> BoardifyResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> BoardifyResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}
