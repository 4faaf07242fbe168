//! Version history timeline.
//!
//! [`VersionTimeline`] is a view-model over an owner-supplied list of
//! [`RevisionRecord`](crate::models::RevisionRecord)s. It keeps only the filter dropdown
//! state; selection and visibility come from [`TimelineProps`] and user choices are
//! reported through [`TimelineOwner`].

pub mod filter;
pub mod state;
pub mod version;

pub use filter::{VersionType, compute_visible_revisions, empty_placeholder};
pub use state::{TimelineOwner, TimelineProps, TimelineRow, TimelineView, VersionTimeline};
pub use version::is_major_version;
