//! OS keychain storage via the `keyring` crate.
//!
//! Each key becomes one keychain entry under a shared service name. Keychain
//! calls are synchronous and may wait on a user prompt, so they run on the
//! blocking pool.

use crate::traits::CredentialStore;
use boardify_core::{BoardifyError, BoardifyResult};
use keyring::Entry;

pub const DEFAULT_SERVICE_NAME: &str = "boardify";

#[derive(Debug, Clone)]
pub struct KeyringCredentialStore {
    service: String,
}

impl Default for KeyringCredentialStore {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE_NAME)
    }
}

impl KeyringCredentialStore {
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
        }
    }

    async fn with_entry<T, F>(&self, key: &str, op: F) -> BoardifyResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Entry) -> BoardifyResult<T> + Send + 'static,
    {
        let service = self.service.clone();
        let key = key.to_string();
        tokio::task::spawn_blocking(move || {
            let entry = Entry::new(&service, &key).map_err(storage_error)?;
            op(&entry)
        })
        .await
        .map_err(|e| BoardifyError::Storage(format!("keychain task failed: {}", e)))?
    }
}

fn storage_error(err: keyring::Error) -> BoardifyError {
    BoardifyError::Storage(format!("keychain operation failed: {}", err))
}

fn read_entry(entry: &Entry) -> BoardifyResult<Option<String>> {
    match entry.get_password() {
        Ok(value) => Ok(Some(value)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(storage_error(e)),
    }
}

fn write_entry(entry: &Entry, value: &str) -> BoardifyResult<()> {
    entry.set_password(value).map_err(storage_error)
}

fn delete_entry(entry: &Entry) -> BoardifyResult<()> {
    match entry.delete_credential() {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(e) => Err(storage_error(e)),
    }
}

#[async_trait::async_trait]
impl CredentialStore for KeyringCredentialStore {
    async fn get(&self, key: &str) -> BoardifyResult<Option<String>> {
        self.with_entry(key, read_entry).await
    }

    async fn set(&self, key: &str, value: &str) -> BoardifyResult<()> {
        let value = value.to_string();
        self.with_entry(key, move |entry| write_entry(entry, &value))
            .await
    }

    async fn remove(&self, key: &str) -> BoardifyResult<()> {
        self.with_entry(key, delete_entry).await
    }
}
