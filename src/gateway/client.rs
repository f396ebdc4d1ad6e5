use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use tokio::time::{timeout_at, Instant};

use crate::config::{build_auth_header, ConfigStore};
use crate::gateway::error::GatewayError;
use crate::gateway::session::SessionMonitor;
use crate::model::UserRecord;

/// HTTP client for the user-administration API.
///
/// Every call attaches `Content-Type: application/json` and, when a
/// credential resolves, `Authorization: Bearer <token>`. Calls are bounded
/// by the configured timeout, measured from dispatch.
#[derive(Clone)]
pub struct ApiGateway {
    client: Client,
    config: ConfigStore,
    session: SessionMonitor,
}

impl ApiGateway {
    pub fn new(config: ConfigStore) -> Self {
        Self {
            client: Client::new(),
            config,
            session: SessionMonitor::new(),
        }
    }

    /// Handle for subscribing to session-expired notifications.
    pub fn session(&self) -> &SessionMonitor {
        &self.session
    }

    /// Fetch the full user collection. The API wraps the records in a
    /// `{ "data": [...] }` envelope; this unwraps it.
    pub async fn list_users(&self) -> Result<Vec<UserRecord>, GatewayError> {
        let body = self.execute(Method::GET, "/users", None).await?;
        let data = body
            .get("data")
            .cloned()
            .ok_or_else(|| GatewayError::MalformedResponse("missing 'data' field".to_string()))?;
        serde_json::from_value(data)
            .map_err(|e| GatewayError::MalformedResponse(format!("invalid record list: {e}")))
    }

    /// Register a new user. The server assigns the id; callers re-fetch
    /// the list to observe the created record.
    pub async fn create_user(&self, record: &UserRecord) -> Result<(), GatewayError> {
        let body = serde_json::to_value(record)
            .map_err(|e| GatewayError::MalformedResponse(format!("unencodable record: {e}")))?;
        self.execute(Method::POST, "/auth/register", Some(body))
            .await?;
        Ok(())
    }

    /// Replace a user record by id (full-record replace).
    pub async fn update_user(&self, id: &str, record: &UserRecord) -> Result<(), GatewayError> {
        let body = serde_json::to_value(record)
            .map_err(|e| GatewayError::MalformedResponse(format!("unencodable record: {e}")))?;
        self.execute(Method::PUT, &format!("/users/{id}"), Some(body))
            .await?;
        Ok(())
    }

    /// Delete a user record by id.
    pub async fn delete_user(&self, id: &str) -> Result<(), GatewayError> {
        self.execute(Method::DELETE, &format!("/users/{id}"), None)
            .await?;
        Ok(())
    }

    /// Issue one request with auth and content-type headers. The configured
    /// timeout is one deadline measured from dispatch: sending the request
    /// and draining the body share it. Returns the parsed JSON body (Null
    /// when the response body is empty).
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, GatewayError> {
        let api = self.config.get().api;
        let duration = api.timeout_seconds;
        let deadline = Instant::now() + Duration::from_secs(duration);

        let url = format!("{}{}", api.base_url.trim_end_matches('/'), path);
        let mut builder = self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");

        if let Some((name, value)) = build_auth_header(&api) {
            builder = builder.header(&name, value);
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = timeout_at(deadline, builder.send())
            .await
            .map_err(|_| GatewayError::Timeout { duration })?
            .map_err(|e| GatewayError::Connection { source: e })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("API rejected credential, signalling session expiry");
            self.session.notify_expired();
            return Err(GatewayError::Unauthorized);
        }

        let text = timeout_at(deadline, response.text())
            .await
            .map_err(|_| GatewayError::Timeout { duration })?
            .map_err(|e| GatewayError::Connection { source: e })?;

        if !status.is_success() {
            return Err(GatewayError::Remote {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text)
            .map_err(|e| GatewayError::MalformedResponse(format!("invalid JSON body: {e}")))
    }
}
