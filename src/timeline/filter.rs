use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::models::RevisionRecord;

/// Revision class filter for the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionType {
    #[default]
    All,
    Major,
    Minor,
}

impl VersionType {
    pub const OPTIONS: [VersionType; 3] = [VersionType::All, VersionType::Major, VersionType::Minor];

    pub fn label(self) -> &'static str {
        match self {
            VersionType::All => "All",
            VersionType::Major => "Major",
            VersionType::Minor => "Minor",
        }
    }

    pub fn matches(self, record: &RevisionRecord) -> bool {
        match self {
            VersionType::All => true,
            VersionType::Major => record.is_major(),
            VersionType::Minor => !record.is_major(),
        }
    }
}

impl fmt::Display for VersionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown version type '{0}' (expected all, major or minor)")]
pub struct UnknownVersionType(pub String);

impl FromStr for VersionType {
    type Err = UnknownVersionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(VersionType::All),
            "major" => Ok(VersionType::Major),
            "minor" => Ok(VersionType::Minor),
            _ => Err(UnknownVersionType(s.to_string())),
        }
    }
}

/// Revisions visible under a filter, in the order supplied
pub fn compute_visible_revisions(
    list: &[RevisionRecord],
    version_type: VersionType,
) -> Vec<&RevisionRecord> {
    list.iter().filter(|record| version_type.matches(record)).collect()
}

/// Placeholder shown when a filter leaves nothing to display
pub fn empty_placeholder(version_type: VersionType) -> String {
    match version_type {
        VersionType::All => "No versions available".to_string(),
        other => format!("No {} versions available", other),
    }
}
