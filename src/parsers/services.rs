use std::path::Path;

use super::error::LoadError;
use super::source::{decode_each, list_items, read_json};
use crate::models::ServiceConnection;

/// Load service connection records; records with an unknown `serviceType` are skipped
pub fn load_services(path: &Path) -> Result<Vec<ServiceConnection>, LoadError> {
    let items = list_items(read_json(path)?, path)?;
    decode_each(items, path, "services", serde_json::from_value)
}
