use crate::cli::Cli;
use boardify_client::BackendService;
use boardify_core::{AppConfig, BoardifyResult};
use boardify_persistence::open_credential_store;

/// Resolved configuration plus the backend client built from it.
pub struct CliContext {
    pub config: AppConfig,
    pub service: BackendService,
}

impl CliContext {
    pub fn load(cli: &Cli) -> BoardifyResult<Self> {
        let config = resolve_config(cli);
        let store = open_credential_store(&config)?;
        let service = BackendService::from_config(&config, store)?;
        tracing::debug!("Using backend {}", service.base_url());
        Ok(Self { config, service })
    }
}

/// Config file values, with command-line flags and environment taking precedence.
fn resolve_config(cli: &Cli) -> AppConfig {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    if let Some(uri) = &cli.backend_uri {
        config.backend_uri = Some(uri.clone());
    }
    if let Some(path) = &cli.credentials {
        config.credentials_path = Some(path.clone());
    }
    config
}
