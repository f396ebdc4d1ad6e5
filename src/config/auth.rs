//! Authentication header building for API requests.

use super::credentials::CredentialStatus;
use super::types::ApiConfig;

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

/// Build the `Authorization: Bearer` header for the API.
///
/// Returns `None` when no credential resolves; the request then goes out
/// without an Authorization header rather than failing.
pub fn build_auth_header(api: &ApiConfig) -> Option<AuthHeader> {
    match api.resolve_credential() {
        CredentialStatus::Configured(token) => Some((
            "Authorization".to_string(),
            format!("Bearer {}", token.expose()),
        )),
        CredentialStatus::Unconfigured { .. } => None,
    }
}
