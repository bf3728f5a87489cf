//! Authenticated access to the Boardify backend.
//!
//! [`BackendService`] is the only way the application talks to the server. It
//! keeps the session token in a [`CredentialStore`](boardify_persistence::CredentialStore),
//! attaches it to every request, and exposes the board and ticket API through
//! [`BoardifyOperations`](boardify_domain::BoardifyOperations).

pub mod endpoints;
pub mod operations;
pub mod payload;
pub mod service;

pub use payload::Payload;
pub use service::BackendService;
