use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::timeline::version::is_major_version;

/// A single entity snapshot from the version history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevisionRecord {
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_version")]
    pub version: String,
    pub updated_by: String,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_timestamp")]
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub change_description: Option<ChangeDescription>,
    /// Remaining snapshot fields, kept opaque for display
    #[serde(flatten)]
    pub snapshot: Map<String, Value>,
}

impl RevisionRecord {
    /// Decode one pre-serialized revision as delivered by the history endpoint
    pub fn from_json_str(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    pub fn previous_version(&self) -> Option<&str> {
        self.change_description.as_ref().and_then(|c| c.previous_version.as_deref())
    }

    /// Whether this revision crossed a major version relative to its predecessor
    pub fn is_major(&self) -> bool {
        is_major_version(self.previous_version(), &self.version)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeDescription {
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_version"
    )]
    pub previous_version: Option<String>,
    #[serde(default)]
    pub fields_added: Vec<FieldChange>,
    #[serde(default)]
    pub fields_updated: Vec<FieldChange>,
    #[serde(default)]
    pub fields_deleted: Vec<FieldChange>,
}

impl ChangeDescription {
    /// One-line summary of the diff: `Added: a; Updated: b, c; Deleted: d`
    ///
    /// Empty groups are omitted. Returns `None` when nothing changed.
    pub fn summary(&self) -> Option<String> {
        let groups = [
            ("Added", &self.fields_added),
            ("Updated", &self.fields_updated),
            ("Deleted", &self.fields_deleted),
        ];

        let parts: Vec<String> = groups
            .iter()
            .filter(|(_, fields)| !fields.is_empty())
            .map(|(label, fields)| {
                let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
                format!("{}: {}", label, names.join(", "))
            })
            .collect();

        if parts.is_empty() { None } else { Some(parts.join("; ")) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldChange {
    pub name: String,
    #[serde(default)]
    pub old_value: Option<Value>,
    #[serde(default)]
    pub new_value: Option<Value>,
}

/// Decoded version history of one entity, newest first as supplied
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntityHistory {
    pub entity_type: String,
    pub versions: Vec<RevisionRecord>,
}
