use std::collections::HashMap;

use crate::model::UserRecord;

/// Collection key for the user screen.
pub const USER_COLLECTION: &str = "user";

/// The store's entire state: collection name → last fetched records.
///
/// Each collection is a complete mirror of the last successful list
/// response, in server order. Partial or optimistic edits are never
/// applied here.
pub type Collections = HashMap<String, Vec<UserRecord>>;
