//! User group types

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fields the user group keeps in minimal mode
pub const MINIMAL_USER_FIELDS: [&str; 1] = ["current_user"];

/// Environment variables copied into the user group when set
pub const SELECTED_ENV_VARS: [&str; 3] = ["SHELL", "LANG", "TERM"];

/// User and session facts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserFacts {
    /// Owner of the running process
    pub current_user: String,
    pub home_directory: String,
    pub working_directory: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub environment: BTreeMap<String, String>,
    /// Logged-in usernames, de-duplicated, in session order. Absent when
    /// the host has no session listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_users: Option<Vec<String>>,
}
