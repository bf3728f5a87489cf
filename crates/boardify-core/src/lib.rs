pub mod config;
pub mod error;
pub mod result;

pub use config::{AppConfig, CredentialStoreKind, LoginEncoding};
pub use error::BoardifyError;
pub use result::BoardifyResult;
