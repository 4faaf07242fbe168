use std::path::Path;

use super::error::LoadError;
use super::source::{decode_each, list_items, read_json};
use crate::models::Thread;

/// Load an activity feed export (bare array or paged `{"data": [...]}` response)
pub fn load_feed(path: &Path) -> Result<Vec<Thread>, LoadError> {
    let items = list_items(read_json(path)?, path)?;
    decode_each(items, path, "threads", serde_json::from_value)
}
