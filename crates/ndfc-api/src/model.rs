// Network record model.
//
// NDFC network records are deliberately schemaless here: the tool passes
// most fields through untouched and only reads a handful for display and
// addressing, so the record is a generic JSON object rather than a struct.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A network record as returned by the controller.
///
/// An opaque mapping of string keys to arbitrary JSON values. Accessors
/// exist only for the fields the tool actually reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Network(Map<String, Value>);

impl Network {
    /// The raw field map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the record, returning the raw field map.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    /// Look up a raw field value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Look up a field as a string slice.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// The unique `networkName` identifier (the addressing key for updates).
    pub fn network_name(&self) -> Option<&str> {
        self.str_field("networkName")
    }

    /// The human-assigned `displayName` label (not guaranteed unique).
    pub fn display_name(&self) -> Option<&str> {
        self.str_field("displayName")
    }

    /// Render a field for display: strings verbatim, other values as
    /// compact JSON. `None` when the field is absent or null.
    pub fn field_display(&self, key: &str) -> Option<String> {
        match self.0.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        }
    }
}

impl From<Map<String, Value>> for Network {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
