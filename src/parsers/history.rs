use std::path::Path;

use serde_json::Value;
use tracing::debug;

use super::error::LoadError;
use super::source::{decode_each, read_json};
use crate::models::{EntityHistory, RevisionRecord};

/// Load an entity's version history export
///
/// Accepts the history endpoint's response, `{"entityType": ..., "versions": [...]}`,
/// where each version is a JSON-encoded string, or a bare array of revisions.
/// Versions are decoded once here; the rest of the crate only sees structured records.
pub fn load_entity_history(path: &Path) -> Result<EntityHistory, LoadError> {
    let value = read_json(path)?;

    let (entity_type, raw_versions) = match value {
        Value::Array(items) => (String::new(), items),
        Value::Object(mut map) => {
            let entity_type = match map.remove("entityType") {
                Some(Value::String(s)) => s,
                _ => String::new(),
            };
            match map.remove("versions") {
                Some(Value::Array(items)) => (entity_type, items),
                _ => {
                    return Err(LoadError::Json {
                        path: path.to_path_buf(),
                        source: serde::de::Error::custom("missing \"versions\" array"),
                    });
                }
            }
        }
        _ => {
            return Err(LoadError::Json {
                path: path.to_path_buf(),
                source: serde::de::Error::custom("expected an entity history object or array"),
            });
        }
    };

    let versions = decode_each(raw_versions, path, "revisions", decode_revision)?;
    debug!(path = %path.display(), count = versions.len(), "loaded entity history");

    Ok(EntityHistory { entity_type, versions })
}

/// Decode one revision that is either pre-serialized text or an inline object
pub fn decode_revision(value: Value) -> serde_json::Result<RevisionRecord> {
    match value {
        Value::String(raw) => RevisionRecord::from_json_str(&raw),
        other => serde_json::from_value(other),
    }
}
