//! Credential resolution from configuration.
//!
//! The bearer token is resolved from the environment on demand and never
//! cached, so rotating the variable takes effect on the next request.

use super::types::ApiConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value. Use sparingly and only when actually
    /// sending to the API.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of credential resolution.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// Token resolved successfully.
    Configured(SecureString),
    /// Token is missing or empty. Requests go out without an
    /// Authorization header; this is not an error.
    Unconfigured { reason: String },
}

impl ApiConfig {
    /// Resolve the bearer token from the configured environment variable.
    pub fn resolve_credential(&self) -> CredentialStatus {
        if self.auth_env_var.is_empty() {
            return CredentialStatus::Unconfigured {
                reason: "no auth_env_var configured".to_string(),
            };
        }
        match std::env::var(&self.auth_env_var) {
            Ok(value) if !value.is_empty() => CredentialStatus::Configured(SecureString::new(value)),
            Ok(_) => CredentialStatus::Unconfigured {
                reason: format!("environment variable {} is empty", self.auth_env_var),
            },
            Err(_) => CredentialStatus::Unconfigured {
                reason: format!("environment variable {} not set", self.auth_env_var),
            },
        }
    }
}
