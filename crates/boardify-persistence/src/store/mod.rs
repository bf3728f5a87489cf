pub mod atomic_writer;
pub mod json_file_store;
#[cfg(feature = "keyring")]
pub mod keyring_store;
pub mod memory_store;

pub use atomic_writer::AtomicWriter;
pub use json_file_store::JsonFileCredentialStore;
#[cfg(feature = "keyring")]
pub use keyring_store::KeyringCredentialStore;
pub use memory_store::MemoryCredentialStore;
