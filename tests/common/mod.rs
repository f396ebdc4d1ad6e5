//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

pub mod mock_api;

use std::path::PathBuf;

use userdesk::config::{ApiConfig, Config, ConfigStore};
use userdesk::gateway::ApiGateway;
use userdesk::model::{UserRecord, UserStatus};
use userdesk::store::{EntityStore, UserActions};

/// Config store pointing at a mock server, with no credential configured
/// unless the test sets `auth_env_var` itself.
pub fn test_config(base_url: &str, timeout_seconds: u64, auth_env_var: &str) -> ConfigStore {
    let config = Config {
        api: ApiConfig {
            base_url: base_url.to_string(),
            auth_env_var: auth_env_var.to_string(),
            timeout_seconds,
        },
    };
    ConfigStore::new(config, PathBuf::from("/tmp/userdesk-test.toml"))
}

/// Gateway + store + actions wired against a mock server.
pub fn test_actions(base_url: &str) -> (UserActions, EntityStore) {
    let gateway = ApiGateway::new(test_config(base_url, 5, "USERDESK_TEST_UNSET"));
    let store = EntityStore::new();
    (UserActions::new(gateway, store.clone()), store)
}

pub fn user(id: &str, first: &str, last: &str, status: UserStatus) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}@example.com", first.to_lowercase()),
        mobile: "+15550100".to_string(),
        status,
        country: "US".to_string(),
        addresses: Vec::new(),
        profile_url: None,
    }
}

/// Serialize records as the API's list payload (the bare array, without
/// the envelope — see `MockResponse::user_list`).
pub fn records_json(records: &[UserRecord]) -> String {
    serde_json::to_string(records).unwrap()
}
