//! Locating the catalog export files
//!
//! Commands take explicit paths; when one is omitted the file is looked up by its
//! default name in the data directory.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "CATALOG_TIMELINE_DIR";

pub const HISTORY_FILE: &str = "history.json";
pub const FEED_FILE: &str = "feed.json";
pub const SERVICES_FILE: &str = "services.json";

/// Resolve the data directory: explicit flag, then the environment, then the platform
/// data dir
///
/// The flag and the environment variable are both surfaced through clap, so by the time
/// this runs `explicit` already carries either of them.
pub fn data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    match dirs::data_dir() {
        Some(base) => Ok(base.join("catalog-timeline")),
        None => bail!("Could not determine a data directory; pass --data-dir or set {}", DATA_DIR_ENV),
    }
}

/// Use `explicit` if given, otherwise `default_name` inside the data directory
pub fn resolve_data_file(
    explicit: Option<&Path>,
    data_dir_flag: Option<&Path>,
    default_name: &str,
) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(data_dir(data_dir_flag)?.join(default_name)),
    }
}
