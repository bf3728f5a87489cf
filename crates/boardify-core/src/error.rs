use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardifyError {
    #[error("HTTP {status} returned by {method} {url}")]
    Http {
        method: String,
        url: String,
        status: u16,
    },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Could not decode response: {0}")]
    Deserialization(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Credential storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BoardifyError {
    /// True for failures reported by the server or the network, as opposed to
    /// a response that arrived but did not match the expected shape.
    pub fn is_http_failure(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Transport(_))
    }

    /// Status code of an HTTP failure, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
