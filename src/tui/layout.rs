use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split-pane layout configuration
pub struct AppLayout {
    pub feed_area: Rect,
    /// Version history drawer or thread panel, when one is showing
    pub side_area: Option<Rect>,
    pub status_area: Rect,
}

impl AppLayout {
    /// Create layout:
    /// - Feed: full width, or 55% when a side pane is showing
    /// - Side pane: remaining 45% (right)
    /// - Status bar: bottom row
    pub fn new(area: Rect, side_visible: bool) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area (at least 3 rows)
                Constraint::Length(1), // Status bar (1 row)
            ])
            .split(area);

        if !side_visible {
            return Self {
                feed_area: vertical_chunks[0],
                side_area: None,
                status_area: vertical_chunks[1],
            };
        }

        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(vertical_chunks[0]);

        Self {
            feed_area: horizontal_chunks[0],
            side_area: Some(horizontal_chunks[1]),
            status_area: vertical_chunks[1],
        }
    }
}
