use chrono::{DateTime, Utc};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::app::{Composer, Focus, MessageType, StatusMessage};
use super::feed_view::{render_feed, render_thread_panel};
use super::layout::AppLayout;
use super::timeline_view::render_timeline;
use crate::feed::FeedView;
use crate::models::Thread;
use crate::timeline::TimelineView;

pub(super) const BRIGHT: Color = Color::Rgb(250, 250, 250);
pub(super) const MUTED: Color = Color::Rgb(113, 113, 122);
pub(super) const ACCENT: Color = Color::Rgb(16, 185, 129); // Emerald
pub(super) const WARN: Color = Color::Rgb(245, 158, 11); // Amber
const ERROR: Color = Color::Rgb(239, 68, 68);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

pub(super) fn border_block(title: &str, focused: bool) -> Block<'static> {
    let color = if focused { ACCENT } else { MUTED };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title.to_string())
}

/// What occupies the right-hand pane
pub enum SidePane<'a> {
    None,
    Timeline { title: String, view: TimelineView<'a>, cursor: usize },
    Thread(&'a Thread),
}

/// Everything needed to draw one frame
pub struct RenderState<'a> {
    pub feed: &'a FeedView<'a>,
    pub feed_cursor: usize,
    pub side: SidePane<'a>,
    pub focus: Focus,
    pub composer: Option<&'a Composer>,
    pub status_message: Option<&'a StatusMessage>,
    pub thread_count: usize,
    pub version_count: usize,
    pub now: DateTime<Utc>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState<'_>) {
    let side_visible = !matches!(state.side, SidePane::None);
    let layout = AppLayout::new(frame.area(), side_visible);

    render_feed(
        frame,
        layout.feed_area,
        state.feed,
        state.feed_cursor,
        state.focus == Focus::Feed,
        state.composer,
        &state.now,
    );

    if let Some(side_area) = layout.side_area {
        match &state.side {
            SidePane::Timeline { title, view, cursor } => render_timeline(
                frame,
                side_area,
                title,
                view,
                *cursor,
                state.focus == Focus::Timeline,
                &state.now,
            ),
            SidePane::Thread(thread) => {
                render_thread_panel(frame, side_area, thread, state.composer, &state.now)
            }
            SidePane::None => {}
        }
    }

    render_status_bar(frame, layout.status_area, state);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState<'_>) {
    let (text, style) = match state.status_message {
        Some(msg) => {
            let fg = match msg.message_type {
                MessageType::Success => ACCENT,
                MessageType::Error => ERROR,
            };
            (format!(" {} ", msg.text), Style::default().fg(fg).bg(BAR_BG))
        }
        None => {
            let mut parts = vec![format!(
                "{} threads | {} versions",
                state.thread_count, state.version_count
            )];

            if state.composer.is_some() {
                parts.push("Enter: post".to_string());
                parts.push("Esc: cancel".to_string());
            } else {
                match state.focus {
                    Focus::Feed => {
                        parts.push("Enter: expand".to_string());
                        parts.push("i: reply".to_string());
                        parts.push("p: panel".to_string());
                        parts.push("h: history".to_string());
                    }
                    Focus::Timeline => {
                        parts.push("Enter: select".to_string());
                        parts.push("f: filter".to_string());
                        parts.push("Esc: back".to_string());
                    }
                }
                parts.push("Tab: focus".to_string());
                parts.push("Ctrl+C: quit".to_string());
            }

            (format!(" {} ", parts.join(" | ")), Style::default().fg(BRIGHT).bg(BAR_BG))
        }
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}
