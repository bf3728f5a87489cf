use crate::store::JsonFileCredentialStore;
use crate::traits::CredentialStore;
use boardify_core::{AppConfig, BoardifyError, BoardifyResult, CredentialStoreKind};
use std::sync::Arc;

/// Open the credential store selected by `config`.
///
/// The keyring backend is only available when built with the `keyring` feature.
pub fn open_credential_store(config: &AppConfig) -> BoardifyResult<Arc<dyn CredentialStore>> {
    match config.credential_store {
        CredentialStoreKind::File => {
            let path = config.effective_credentials_path().ok_or_else(|| {
                BoardifyError::Config(
                    "no data directory available; set credentials_path".to_string(),
                )
            })?;
            tracing::debug!("Using credential file {}", path.display());
            Ok(Arc::new(JsonFileCredentialStore::new(path)))
        }
        #[cfg(feature = "keyring")]
        CredentialStoreKind::Keyring => {
            tracing::debug!("Using OS keychain for credentials");
            Ok(Arc::new(crate::store::KeyringCredentialStore::default()))
        }
        #[cfg(not(feature = "keyring"))]
        CredentialStoreKind::Keyring => Err(BoardifyError::Config(
            "keyring credential store requested but boardify was built without the `keyring` feature"
                .to_string(),
        )),
    }
}
