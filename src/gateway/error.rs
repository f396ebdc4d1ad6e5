//! Error types for remote API calls.
//!
//! Every failure a caller can observe from the gateway is one of these
//! variants; reqwest and serde errors never escape raw.

use thiserror::Error;

/// Errors that can occur during gateway operations.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Request exceeded the configured total timeout.
    #[error("Request timeout after {duration}s")]
    Timeout { duration: u64 },

    /// The API rejected the credential (HTTP 401). A session-expired
    /// notification is emitted alongside this error; the gateway itself
    /// never redirects or clears session state.
    #[error("Unauthorized: session credential rejected")]
    Unauthorized,

    /// Any other non-2xx response.
    #[error("Remote error: {status} - {body}")]
    Remote { status: u16, body: String },

    /// Failed to reach the API at all.
    #[error("Connection failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// A 2xx response whose body did not match the documented shape.
    /// Callers keep their last good snapshot when they see this.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}
