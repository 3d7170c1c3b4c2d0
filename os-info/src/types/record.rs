//! The assembled record and its per-group results

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::LookupError;

/// Top-level key of the system group
pub const SYSTEM_GROUP: &str = "system";
/// Top-level key of the network group
pub const NETWORK_GROUP: &str = "network";
/// Top-level key of the user group
pub const USER_GROUP: &str = "user";

/// Key of the single field carried by a failed group
pub const ERROR_FIELD: &str = "error";

/// Outcome of collecting one group
#[derive(Debug, Clone, PartialEq)]
pub enum GroupResult {
    /// Fields in collection order
    Collected(Map<String, Value>),
    /// Lookup failed; rendered as `{ "error": <message> }`
    Failed(String),
}

impl GroupResult {
    /// Build a group from a lookup, turning errors into the marker
    pub fn from_lookup<T: Serialize>(lookup: Result<T, LookupError>) -> Self {
        let facts = match lookup {
            Ok(facts) => facts,
            Err(e) => return Self::Failed(e.to_string()),
        };

        match serde_json::to_value(facts) {
            Ok(Value::Object(map)) => Self::Collected(map),
            Ok(other) => Self::Failed(format!("expected a mapping, got {other}")),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Remove the named fields, keeping the order of the rest
    pub fn drop_fields(&mut self, names: &[&str]) {
        if let Self::Collected(map) = self {
            map.retain(|key, _| !names.contains(&key.as_str()));
        }
    }

    /// Keep only the named fields. Never adds a field that was not collected.
    pub fn keep_fields(&mut self, names: &[&str]) {
        if let Self::Collected(map) = self {
            map.retain(|key, _| names.contains(&key.as_str()));
        }
    }

    fn into_map(self) -> Map<String, Value> {
        match self {
            Self::Collected(map) => map,
            Self::Failed(message) => {
                let mut map = Map::new();
                map.insert(ERROR_FIELD.to_string(), Value::String(message));
                map
            }
        }
    }
}

/// Immutable snapshot produced by one collection run
///
/// Serializes as the ordered mapping `{system, network, user}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InfoRecord(Map<String, Value>);

impl InfoRecord {
    /// Combine the three group results into a record
    pub fn from_groups(system: GroupResult, network: GroupResult, user: GroupResult) -> Self {
        let mut map = Map::new();
        map.insert(SYSTEM_GROUP.to_string(), Value::Object(system.into_map()));
        map.insert(NETWORK_GROUP.to_string(), Value::Object(network.into_map()));
        map.insert(USER_GROUP.to_string(), Value::Object(user.into_map()));
        Self(map)
    }

    /// Fields of one group, if present
    pub fn group(&self, name: &str) -> Option<&Map<String, Value>> {
        self.0.get(name).and_then(Value::as_object)
    }

    /// First of `names` present in `group`
    pub fn field(&self, group: &str, names: &[&str]) -> Option<&Value> {
        let fields = self.group(group)?;
        names.iter().find_map(|name| fields.get(*name))
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl TryFrom<Value> for InfoRecord {
    type Error = Value;

    /// Accepts any JSON object; anything else is handed back
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}
