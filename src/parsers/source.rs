use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;
use tracing::{info, warn};

use super::error::LoadError;

/// Maximum accepted export size (10MB)
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Open a JSON export, validate its size and parse it into a generic value
///
/// The size check uses the open handle so the file can't change between
/// check and read.
pub fn read_json(path: &Path) -> Result<Value, LoadError> {
    let file =
        File::open(path).map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;
    validate_file_size(&file, path)?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|source| LoadError::Json { path: path.to_path_buf(), source })
}

pub fn validate_file_size(file: &File, path: &Path) -> Result<(), LoadError> {
    let metadata =
        file.metadata().map_err(|source| LoadError::Io { path: path.to_path_buf(), source })?;

    let size = metadata.len();
    if size > MAX_FILE_SIZE_BYTES {
        return Err(LoadError::TooLarge {
            path: path.to_path_buf(),
            size,
            max: MAX_FILE_SIZE_BYTES,
        });
    }

    Ok(())
}

/// Unwrap a list payload: either a bare array or a paged `{"data": [...]}` envelope
pub fn list_items(value: Value, path: &Path) -> Result<Vec<Value>, LoadError> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => Ok(items),
            _ => Err(not_a_list(path)),
        },
        _ => Err(not_a_list(path)),
    }
}

fn not_a_list(path: &Path) -> LoadError {
    LoadError::Json {
        path: path.to_path_buf(),
        source: serde::de::Error::custom("expected an array or an object with a \"data\" array"),
    }
}

/// Decode each item, skipping the ones that fail
///
/// Individual failures are logged and dropped. More than half failing means the
/// export is broken, and the whole load fails.
pub fn decode_each<T, F>(
    items: Vec<Value>,
    path: &Path,
    kind: &'static str,
    decode: F,
) -> Result<Vec<T>, LoadError>
where
    F: Fn(Value) -> serde_json::Result<T>,
{
    let total = items.len();
    let mut decoded = Vec::with_capacity(total);
    let mut failed = 0;

    for (idx, item) in items.into_iter().enumerate() {
        match decode(item) {
            Ok(value) => decoded.push(value),
            Err(e) => {
                warn!(path = %path.display(), index = idx, error = %e, "skipping invalid {}", kind);
                failed += 1;
            }
        }
    }

    if total > 0 && failed * 2 > total {
        return Err(LoadError::TooManyInvalid { path: path.to_path_buf(), kind, failed, total });
    }

    if failed > 0 {
        info!(path = %path.display(), loaded = decoded.len(), skipped = failed, "loaded {}", kind);
    }

    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn decode_number(value: Value) -> serde_json::Result<u32> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_list_items_bare_array() {
        let items = list_items(json!([1, 2]), Path::new("x.json")).unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_list_items_data_envelope() {
        let items = list_items(json!({"data": [1], "paging": {}}), Path::new("x.json")).unwrap();
        assert_eq!(items, vec![json!(1)]);
    }

    #[test]
    fn test_list_items_rejects_scalar() {
        let err = list_items(json!("nope"), Path::new("x.json")).unwrap_err();
        assert!(matches!(err, LoadError::Json { .. }));
    }

    #[test]
    fn test_decode_each_skips_minority_failures() {
        let items = vec![json!(1), json!("bad"), json!(3)];
        let decoded = decode_each(items, Path::new("x.json"), "numbers", decode_number).unwrap();
        assert_eq!(decoded, vec![1, 3]);
    }

    #[test]
    fn test_decode_each_fails_on_majority_failures() {
        let items = vec![json!(1), json!("bad"), json!("worse")];
        let err = decode_each(items, Path::new("x.json"), "numbers", decode_number).unwrap_err();
        match err {
            LoadError::TooManyInvalid { failed, total, kind, .. } => {
                assert_eq!(failed, 2);
                assert_eq!(total, 3);
                assert_eq!(kind, "numbers");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_each_exactly_half_is_tolerated() {
        let items = vec![json!(1), json!("bad")];
        let decoded = decode_each(items, Path::new("x.json"), "numbers", decode_number).unwrap();
        assert_eq!(decoded, vec![1]);
    }

    #[test]
    fn test_read_json_missing_file() {
        let err = read_json(Path::new("/nonexistent/feed.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/feed.json"));
    }
}
