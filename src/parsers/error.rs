use std::path::PathBuf;

use thiserror::Error;

/// Failures at the loading boundary
///
/// Display components never see these; they only receive decoded data.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("File too large: {} ({size} bytes, max {max} bytes)", .path.display())]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    #[error(
        "Too many invalid {kind} in {}: {failed} of {total} failed to decode",
        .path.display()
    )]
    TooManyInvalid { path: PathBuf, kind: &'static str, failed: usize, total: usize },
}
