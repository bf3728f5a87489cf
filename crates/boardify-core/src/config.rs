use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_BACKEND_URI: &str = "http://127.0.0.1:8000";

/// Where the session token is kept between runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialStoreKind {
    #[default]
    File,
    Keyring,
}

/// Body encoding used for the login exchange.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginEncoding {
    #[default]
    Json,
    /// `application/x-www-form-urlencoded`, as expected by OAuth2 password-flow backends.
    Form,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub backend_uri: Option<String>,
    #[serde(default)]
    pub credential_store: CredentialStoreKind,
    #[serde(default)]
    pub credentials_path: Option<PathBuf>,
    #[serde(default)]
    pub login_encoding: LoginEncoding,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/boardify/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("boardify/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("boardify\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Reads the config at `path`, falling back to defaults when the file is
    /// missing or does not parse.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => return config,
                Err(e) => tracing::warn!("Ignoring invalid config at {}: {}", path.display(), e),
            },
            Err(e) => tracing::warn!("Could not read config at {}: {}", path.display(), e),
        }
        Self::default()
    }

    pub fn effective_backend_uri(&self) -> &str {
        self.backend_uri.as_deref().unwrap_or(DEFAULT_BACKEND_URI)
    }

    pub fn effective_credentials_path(&self) -> Option<PathBuf> {
        self.credentials_path.clone().or_else(|| {
            dirs::data_dir().map(|data| data.join("boardify").join("credentials.json"))
        })
    }
}
