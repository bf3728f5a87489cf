use boardify_core::{BoardifyError, BoardifyResult};
use serde::Serialize;

/// Request body handed to [`BackendService::fetch`](crate::BackendService::fetch).
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Payload {
    #[default]
    Empty,
    /// Pre-serialized JSON, sent as `application/json`.
    Json(Vec<u8>),
    /// Sent as `application/x-www-form-urlencoded`.
    Form(Vec<(String, String)>),
}

impl Payload {
    pub fn json<T: Serialize + ?Sized>(body: &T) -> BoardifyResult<Self> {
        serde_json::to_vec(body)
            .map(Payload::Json)
            .map_err(|e| BoardifyError::Serialization(e.to_string()))
    }

    pub fn form<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Payload::Form(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Payload::Empty)
    }
}
