//! Configuration: API endpoint, credentials, and shared storage.

mod auth;
mod credentials;
mod loader;
mod store;
mod types;

pub use auth::{build_auth_header, AuthHeader};
pub use credentials::{CredentialStatus, SecureString};
pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{ApiConfig, Config};
