//! Catalog Timeline - entity version history and activity threads from catalog exports
//!
//! Two view components sit at the core, both driven by an owner that supplies the data
//! and receives callbacks:
//!
//! - [`timeline::VersionTimeline`]: an entity's revisions with an All / Major / Minor
//!   filter and a badge on major version jumps
//! - [`feed::ActivityFeedList`]: discussion threads grouped by relative day, with inline
//!   replies, a side panel and an Escape listener tied to the component's lifetime
//!
//! Loaders in [`parsers`] decode the export files, and [`tui`] is the interactive owner.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use catalog_timeline::load_entity_history;
//! use catalog_timeline::timeline::{VersionType, compute_visible_revisions};
//!
//! let history = load_entity_history(Path::new("history.json"))?;
//! let majors = compute_visible_revisions(&history.versions, VersionType::Major);
//! println!("{} major revisions", majors.len());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod config;
pub mod feed;
pub mod logging;
pub mod models;
pub mod parsers;
pub mod timeline;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use feed::ActivityFeedList;
pub use models::{EntityHistory, RevisionRecord, ServiceConnection, Thread};
pub use parsers::{LoadError, load_entity_history, load_feed, load_services};
pub use timeline::{VersionTimeline, VersionType};
