//! Wire model for the user collection.
//!
//! Field names follow the remote API's JSON contract (camelCase), so these
//! types serialize directly into request bodies and out of responses.

use serde::{Deserialize, Serialize};

/// Account status as reported by the remote API.
///
/// The API only documents `Active` and `Suspended`, but the wire format is a
/// plain string, so unknown values are preserved rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    Active,
    Suspended,
    #[serde(untagged)]
    Other(String),
}

impl UserStatus {
    pub fn as_str(&self) -> &str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Suspended => "Suspended",
            UserStatus::Other(s) => s,
        }
    }
}

impl Default for UserStatus {
    fn default() -> Self {
        UserStatus::Active
    }
}

/// One postal address attached to a user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub address: String,
    pub city: String,
    pub state: String,
    pub pin_code: String,
    /// Server-assigned; absent on records built locally for create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// One managed user record. Identity is `id`; uniqueness holds within a
/// collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    #[serde(default)]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    #[serde(default)]
    pub status: UserStatus,
    pub country: String,
    #[serde(default)]
    pub addresses: Vec<Address>,
    /// Reference to an uploaded profile image, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_url: Option<String>,
}

impl UserRecord {
    /// Full display name, used by the presentation layer and by sort.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
