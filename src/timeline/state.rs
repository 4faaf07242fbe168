use tracing::debug;

use super::filter::{VersionType, compute_visible_revisions, empty_placeholder};
use crate::models::RevisionRecord;

/// Callbacks the timeline reports to whoever owns it
pub trait TimelineOwner {
    /// A revision row was activated; receives the version string, not the row index
    fn version_selected(&mut self, version: &str);

    /// The back/close affordance was activated
    fn back(&mut self);
}

/// Data supplied by the owner on every render
#[derive(Debug, Clone, Copy)]
pub struct TimelineProps<'a> {
    pub versions: &'a [RevisionRecord],
    pub current_version: Option<&'a str>,
    /// Visibility is owned by the parent; the timeline keeps no open flag of its own
    pub show: bool,
}

/// One rendered revision row
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineRow<'a> {
    pub record: &'a RevisionRecord,
    pub is_selected: bool,
    pub show_major_badge: bool,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineView<'a> {
    pub version_type: VersionType,
    pub list_visible: bool,
    pub rows: Vec<TimelineRow<'a>>,
    /// Set when the active filter leaves no rows
    pub placeholder: Option<String>,
}

/// Version history drawer state: the filter dropdown and the active filter
#[derive(Debug, Clone, Default)]
pub struct VersionTimeline {
    list_visible: bool,
    version_type: VersionType,
}

impl VersionTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version_type(&self) -> VersionType {
        self.version_type
    }

    pub fn is_list_visible(&self) -> bool {
        self.list_visible
    }

    pub fn toggle_filter_menu(&mut self) {
        self.list_visible = !self.list_visible;
    }

    /// Apply a dropdown choice; the dropdown closes whether or not a value was chosen
    pub fn choose_filter(&mut self, choice: Option<VersionType>) {
        if let Some(version_type) = choice {
            debug!(from = %self.version_type, to = %version_type, "timeline filter changed");
            self.version_type = version_type;
        }
        self.list_visible = false;
    }

    pub fn select_revision(&self, version: &str, owner: &mut impl TimelineOwner) {
        owner.version_selected(version);
    }

    pub fn close(&self, owner: &mut impl TimelineOwner) {
        owner.back();
    }

    pub fn visible_revisions<'a>(&self, versions: &'a [RevisionRecord]) -> Vec<&'a RevisionRecord> {
        compute_visible_revisions(versions, self.version_type)
    }

    /// Build the rendered view, or `None` while the owner hides the drawer
    ///
    /// Selection is derived fresh from `current_version` on every call.
    pub fn view<'a>(&self, props: TimelineProps<'a>) -> Option<TimelineView<'a>> {
        if !props.show {
            return None;
        }

        let rows: Vec<TimelineRow<'a>> = self
            .visible_revisions(props.versions)
            .into_iter()
            .map(|record| TimelineRow {
                record,
                is_selected: props.current_version == Some(record.version.as_str()),
                show_major_badge: self.version_type == VersionType::All && record.is_major(),
                summary: record.change_description.as_ref().and_then(|c| c.summary()),
            })
            .collect();

        let placeholder = rows.is_empty().then(|| empty_placeholder(self.version_type));

        Some(TimelineView {
            version_type: self.version_type,
            list_visible: self.list_visible,
            rows,
            placeholder,
        })
    }
}
