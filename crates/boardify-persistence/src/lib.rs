pub mod factory;
pub mod store;
pub mod traits;

pub use factory::open_credential_store;
pub use store::*;
pub use traits::*;
