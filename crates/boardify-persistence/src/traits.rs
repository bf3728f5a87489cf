use async_trait::async_trait;
use boardify_core::BoardifyResult;

/// Key under which the serialized session token is stored.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Durable string key/value storage for client session state.
///
/// Implementations must survive process restarts (except the in-memory one,
/// which exists for tests and throwaway sessions). Concurrent writers follow
/// last-write-wins; no stronger guarantee is needed.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if it was never set or has been removed.
    async fn get(&self, key: &str) -> BoardifyResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> BoardifyResult<()>;

    /// Remove `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> BoardifyResult<()>;
}
