//! HTTP transport with token lookup and `Authorization` header injection.
//!
//! Every backend call funnels through [`BackendService::execute`], so header
//! handling and status checks are identical for all operations.

use crate::payload::Payload;
use boardify_core::{AppConfig, BoardifyError, BoardifyResult, LoginEncoding};
use boardify_domain::Token;
use boardify_persistence::{CredentialStore, AUTH_TOKEN_KEY};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, Url};
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;

/// Client for the Boardify backend.
///
/// Cheap to clone: clones share the connection pool and the credential store.
/// The base URL is fixed at construction.
#[derive(Clone)]
pub struct BackendService {
    http: Client,
    base_url: String,
    store: Arc<dyn CredentialStore>,
    login_encoding: LoginEncoding,
}

impl fmt::Debug for BackendService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendService")
            .field("base_url", &self.base_url)
            .field("login_encoding", &self.login_encoding)
            .finish_non_exhaustive()
    }
}

impl BackendService {
    /// Create a client for the backend at `base_uri`.
    pub fn new(base_uri: &str, store: Arc<dyn CredentialStore>) -> BoardifyResult<Self> {
        Self::with_client(Client::new(), base_uri, store)
    }

    /// Create a client on top of a preconfigured reqwest [`Client`].
    pub fn with_client(
        http: Client,
        base_uri: &str,
        store: Arc<dyn CredentialStore>,
    ) -> BoardifyResult<Self> {
        let parsed = Url::parse(base_uri)
            .map_err(|e| BoardifyError::Config(format!("invalid backend URI '{}': {}", base_uri, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(BoardifyError::Config(format!(
                "backend URI must use http or https, got '{}'",
                parsed.scheme()
            )));
        }

        Ok(Self {
            http,
            base_url: base_uri.trim_end_matches('/').to_string(),
            store,
            login_encoding: LoginEncoding::default(),
        })
    }

    pub fn from_config(config: &AppConfig, store: Arc<dyn CredentialStore>) -> BoardifyResult<Self> {
        Ok(Self::new(config.effective_backend_uri(), store)?
            .with_login_encoding(config.login_encoding))
    }

    pub fn with_login_encoding(mut self, encoding: LoginEncoding) -> Self {
        self.login_encoding = encoding;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn login_encoding(&self) -> LoginEncoding {
        self.login_encoding
    }

    pub(crate) fn store(&self) -> &dyn CredentialStore {
        self.store.as_ref()
    }

    /// Point-in-time snapshot of the stored token.
    ///
    /// A missing, empty or undecodable entry counts as no token. Read failures
    /// are logged and treated the same way, so a broken store degrades to
    /// unauthenticated requests instead of blocking them.
    pub async fn stored_token(&self) -> Option<Token> {
        let raw = match self.store.get(AUTH_TOKEN_KEY).await {
            Ok(Some(raw)) if !raw.trim().is_empty() => raw,
            Ok(_) => return None,
            Err(e) => {
                tracing::warn!("Could not read stored token: {}", e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(token) => Some(token),
            Err(e) => {
                tracing::warn!("Ignoring undecodable stored token: {}", e);
                None
            }
        }
    }

    /// Send one request and return the raw body of a successful response.
    ///
    /// Attaches `Authorization: {token_type} {access_token}` when a token is
    /// stored. A non-2xx status fails with [`BoardifyError::Http`] without
    /// reading the body.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
    ) -> BoardifyResult<Vec<u8>> {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.http.request(method.clone(), &url);

        if let Some(token) = self.stored_token().await {
            builder = builder.header(AUTHORIZATION, token.authorization_value());
        }

        builder = match payload {
            Payload::Empty => builder,
            Payload::Json(bytes) => builder.header(CONTENT_TYPE, "application/json").body(bytes),
            Payload::Form(fields) => builder.form(&fields),
        };

        let response = builder.send().await.map_err(|e| {
            tracing::debug!("{} {} failed: {}", method, url, e);
            BoardifyError::Transport(e.to_string())
        })?;

        let status = response.status();
        tracing::debug!("{} {} -> {}", method, url, status);

        if !status.is_success() {
            return Err(BoardifyError::Http {
                method: method.to_string(),
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| BoardifyError::Transport(e.to_string()))?;
        Ok(body.to_vec())
    }

    /// [`execute`](Self::execute) and decode the body as `T`.
    ///
    /// A body that does not match `T` fails with [`BoardifyError::Deserialization`].
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        payload: Payload,
    ) -> BoardifyResult<T> {
        let body = self.execute(method, path, payload).await?;
        serde_json::from_slice(&body)
            .map_err(|e| BoardifyError::Deserialization(format!("{}: {}", path, e)))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> BoardifyResult<T> {
        self.fetch(Method::GET, path, Payload::Empty).await
    }
}
