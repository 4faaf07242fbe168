//! TUI application state and event handling.
//!
//! The `App` is the owner both view components report to:
//!
//! - **Version timeline**: `App` supplies the revision list, the current version and
//!   whether the drawer is shown; selecting a row or going back comes in through
//!   [`TimelineOwner`].
//! - **Activity feed**: `App` supplies the thread list; replies come in through
//!   [`FeedOwner`], are appended to the in-memory feed, and the new list is handed back
//!   to the feed component so an open panel follows the refresh.
//! - **Escape**: the feed list subscribes to Escape while mounted; `App` offers each
//!   Escape press to it before falling back to its own handling.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut app = App::new(history, feed, AppOptions::default());
//! app.run(&mut terminal)?;
//! ```

use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::{DateTime, Utc};
use crossterm::event::KeyEvent;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::{debug, info};

use super::events::{Action, InputMode, key_to_action, poll_key};
use super::rendering::{RenderState, SidePane, render_ui};
use crate::clipboard::copy_to_clipboard;
use crate::feed::{
    ActivityFeedList, FeedOwner, FeedView, KeyListenerRegistry, ReplyDisplay, reply_display,
};
use crate::models::{EntityHistory, Post, Thread};
use crate::timeline::{TimelineOwner, TimelineProps, VersionTimeline};

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Longest reply the composer accepts
const MAX_REPLY_CHARS: usize = 2000;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Feed,
    Timeline,
}

/// Reply being typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composer {
    pub thread_id: String,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct AppOptions {
    pub enable_side_panel: bool,
    /// Author recorded on replies posted from this session
    pub user: String,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self { enable_side_panel: true, user: "anonymous".to_string() }
    }
}

/// State the components report back to
#[derive(Debug, Default)]
struct Owner {
    current_version: Option<String>,
    show_history: bool,
    outbox: Vec<(String, String)>,
}

impl TimelineOwner for Owner {
    fn version_selected(&mut self, version: &str) {
        self.current_version = Some(version.to_string());
    }

    fn back(&mut self) {
        self.show_history = false;
    }
}

impl FeedOwner for Owner {
    fn post_feed(&mut self, message: &str, thread_id: &str) {
        self.outbox.push((message.to_string(), thread_id.to_string()));
    }
}

pub struct App {
    history: EntityHistory,
    feed: Vec<Thread>,
    timeline: VersionTimeline,
    feed_list: ActivityFeedList,
    key_listeners: Rc<KeyListenerRegistry>,
    owner: Owner,
    user: String,
    focus: Focus,
    feed_cursor: usize,
    timeline_cursor: usize,
    composer: Option<Composer>,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(history: EntityHistory, feed: Vec<Thread>, options: AppOptions) -> Self {
        let key_listeners = KeyListenerRegistry::new();
        let mut feed_list = ActivityFeedList::new(options.enable_side_panel);
        feed_list.mount(&key_listeners);

        // The newest revision is the entity's current version
        let owner = Owner {
            current_version: history.versions.first().map(|r| r.version.clone()),
            ..Default::default()
        };

        Self {
            history,
            feed,
            timeline: VersionTimeline::new(),
            feed_list,
            key_listeners,
            owner,
            user: options.user,
            focus: Focus::Feed,
            feed_cursor: 0,
            timeline_cursor: 0,
            composer: None,
            should_quit: false,
            status_message: None,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear =
            self.status_message.as_ref().is_some_and(|msg| Instant::now() >= msg.expires_at);
        if should_clear {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= Duration::from_millis(100)
            {
                let wall_clock = Utc::now();
                let feed_view = self.feed_list.view(&self.feed, &wall_clock);
                terminal.draw(|f| render_ui(f, &self.render_state(&feed_view, wall_clock)))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            if let Some(key) = poll_key(Duration::from_millis(100))? {
                self.handle_key(key);
            }
        }

        self.feed_list.unmount();
        debug!(listeners = self.key_listeners.listener_count(), "feed list unmounted");
        Ok(())
    }

    fn render_state<'a>(
        &'a self,
        feed_view: &'a FeedView<'a>,
        now: DateTime<Utc>,
    ) -> RenderState<'a> {
        let side = match self.timeline.view(self.timeline_props()) {
            Some(view) => SidePane::Timeline {
                title: self.timeline_title(),
                view,
                cursor: self.timeline_cursor,
            },
            None => match self.feed_list.panel_thread() {
                Some(thread) => SidePane::Thread(thread),
                None => SidePane::None,
            },
        };

        RenderState {
            feed: feed_view,
            feed_cursor: self.feed_cursor,
            side,
            focus: self.focus,
            composer: self.composer.as_ref(),
            status_message: self.status_message.as_ref(),
            thread_count: self.feed.len(),
            version_count: self.history.versions.len(),
            now,
        }
    }

    fn timeline_title(&self) -> String {
        if self.history.entity_type.is_empty() {
            " Version History ".to_string()
        } else {
            format!(" Version History: {} ", self.history.entity_type)
        }
    }

    fn timeline_props(&self) -> TimelineProps<'_> {
        TimelineProps {
            versions: &self.history.versions,
            current_version: self.owner.current_version.as_deref(),
            show: self.owner.show_history,
        }
    }

    fn input_mode(&self) -> InputMode {
        if self.composer.is_some() { InputMode::Compose } else { InputMode::Navigate }
    }

    /// Thread ids in display order (grouped by day)
    fn card_ids(&self) -> Vec<String> {
        match self.feed_list.view(&self.feed, &Utc::now()) {
            FeedView::Onboarding => Vec::new(),
            FeedView::Groups(groups) => groups
                .iter()
                .flat_map(|g| g.cards.iter().map(|c| c.thread.id.clone()))
                .collect(),
        }
    }

    fn current_thread_id(&self) -> Option<String> {
        self.card_ids().into_iter().nth(self.feed_cursor)
    }

    fn current_version(&self) -> Option<String> {
        self.timeline
            .visible_revisions(&self.history.versions)
            .get(self.timeline_cursor)
            .map(|r| r.version.clone())
    }

    /// Handle one key press (extracted for testing)
    fn handle_key(&mut self, key: KeyEvent) {
        let action = key_to_action(key, self.input_mode());
        if action == Action::Escape {
            self.handle_escape(&key);
        } else {
            self.handle_action(action);
        }
    }

    fn handle_escape(&mut self, key: &KeyEvent) {
        self.needs_redraw = true;

        if self.composer.take().is_some() {
            return;
        }
        if self.feed_list.handle_key(key) {
            return;
        }
        if self.focus == Focus::Timeline && self.timeline.is_list_visible() {
            self.timeline.choose_filter(None);
            return;
        }
        if self.owner.show_history {
            self.timeline.close(&mut self.owner);
            self.focus = Focus::Feed;
            return;
        }
        if self.feed_list.selected_thread_id().is_some() {
            self.feed_list.deselect_thread();
            return;
        }
        self.should_quit = true;
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Escape => {}
            Action::MoveUp => self.move_selection(-1),
            Action::MoveDown => self.move_selection(1),
            Action::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Feed if self.owner.show_history => Focus::Timeline,
                    _ => Focus::Feed,
                };
                self.needs_redraw = true;
            }
            Action::ShowHistory => {
                self.owner.show_history = true;
                self.focus = Focus::Timeline;
                self.needs_redraw = true;
            }
            Action::Activate => self.activate(),
            Action::ToggleFilterMenu => {
                if self.focus == Focus::Timeline {
                    self.timeline.toggle_filter_menu();
                    self.needs_redraw = true;
                }
            }
            Action::ChooseFilter(version_type) => {
                if self.focus == Focus::Timeline && self.timeline.is_list_visible() {
                    self.timeline.choose_filter(Some(version_type));
                    self.timeline_cursor = 0;
                    self.needs_redraw = true;
                }
            }
            Action::ViewAllReplies => self.view_all_replies(),
            Action::PromoteToPanel => self.promote_current_thread(),
            Action::StartReply => self.start_reply(),
            Action::Input(c) => {
                if let Some(composer) = self.composer.as_mut() {
                    if composer.text.chars().count() < MAX_REPLY_CHARS {
                        composer.text.push(c);
                        self.needs_redraw = true;
                    }
                }
            }
            Action::DeleteChar => {
                if let Some(composer) = self.composer.as_mut() {
                    if composer.text.pop().is_some() {
                        self.needs_redraw = true;
                    }
                }
            }
            Action::Submit => self.submit_reply(),
            Action::CopyToClipboard => self.copy_focused(),
            Action::None => {}
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let (cursor, total) = match self.focus {
            Focus::Feed => (&mut self.feed_cursor, self.feed.len()),
            Focus::Timeline => (
                &mut self.timeline_cursor,
                self.timeline.visible_revisions(&self.history.versions).len(),
            ),
        };

        if total == 0 {
            *cursor = 0;
            return;
        }

        let old = *cursor;
        let new = (*cursor as isize + delta).max(0) as usize;
        *cursor = new.min(total - 1);

        if old != *cursor {
            self.needs_redraw = true;
        }
    }

    fn activate(&mut self) {
        match self.focus {
            Focus::Timeline => {
                if let Some(version) = self.current_version() {
                    self.timeline.select_revision(&version, &mut self.owner);
                }
            }
            Focus::Feed => {
                if let Some(id) = self.current_thread_id() {
                    if self.feed_list.is_expanded(&id) {
                        self.feed_list.deselect_thread();
                    } else {
                        self.feed_list.select_thread_for_inline_view(&id);
                    }
                }
            }
        }
        self.needs_redraw = true;
    }

    fn view_all_replies(&mut self) {
        let Some(id) = self.current_thread_id() else {
            return;
        };
        let has_hidden_replies = self
            .feed
            .iter()
            .find(|t| t.id == id)
            .is_some_and(|t| matches!(reply_display(t), ReplyDisplay::ViewAll { .. }));

        if !has_hidden_replies {
            self.set_status("✗ All replies already shown", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        }

        // Keep the id so the panel follows feed refreshes
        self.feed_list.select_thread_for_inline_view(&id);
        self.feed_list.view_all_replies(&id, &self.feed);
        self.close_history_for_panel();
    }

    fn promote_current_thread(&mut self) {
        if !self.feed_list.side_panel_enabled() {
            self.set_status("✗ Side panel is disabled", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        }
        let Some(id) = self.current_thread_id() else {
            return;
        };

        self.feed_list.select_thread_for_inline_view(&id);
        self.feed_list.select_thread_for_panel(&id, &self.feed);
        self.feed_list.promote_to_panel();
        self.close_history_for_panel();
    }

    fn close_history_for_panel(&mut self) {
        // The panel and the history drawer share the side pane
        if self.owner.show_history {
            self.timeline.close(&mut self.owner);
        }
        self.focus = Focus::Feed;
        self.needs_redraw = true;
    }

    fn start_reply(&mut self) {
        let target = match self.feed_list.panel_thread() {
            Some(thread) if !self.owner.show_history => Some(thread.id.clone()),
            _ => self.current_thread_id(),
        };
        let Some(thread_id) = target else {
            return;
        };

        if self.feed_list.panel_thread().is_none() {
            self.feed_list.select_thread_for_inline_view(&thread_id);
        }
        self.composer = Some(Composer { thread_id, text: String::new() });
        self.needs_redraw = true;
    }

    fn submit_reply(&mut self) {
        let Some(composer) = self.composer.take() else {
            return;
        };

        if self.feed_list.post_reply(&composer.text, &composer.thread_id, &mut self.owner) {
            self.apply_posted_replies();
            self.set_status("✓ Reply posted", MessageType::Success, STATUS_SUCCESS_DURATION_MS);
        } else {
            self.composer = Some(composer);
            self.set_status("✗ Reply is empty", MessageType::Error, STATUS_ERROR_DURATION_MS);
        }
    }

    /// Append replies from the outbox to the feed and hand the new list back down
    fn apply_posted_replies(&mut self) {
        let posted_at = Utc::now();
        for (message, thread_id) in self.owner.outbox.drain(..) {
            if let Some(thread) = self.feed.iter_mut().find(|t| t.id == thread_id) {
                thread.posts.push(Post { from: self.user.clone(), message, post_ts: posted_at });
                thread.posts_count += 1;
                info!(thread_id = %thread_id, posts = thread.posts_count, "reply posted");
            }
        }
        self.feed_list.feed_list_changed(&self.feed);
    }

    fn copy_focused(&mut self) {
        let text = match self.focus {
            Focus::Timeline => self.current_version(),
            Focus::Feed => self
                .current_thread_id()
                .and_then(|id| self.feed.iter().find(|t| t.id == id).map(|t| t.message.clone())),
        };

        let Some(text) = text else {
            self.set_status("✗ Nothing to copy", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        };

        match copy_to_clipboard(&text) {
            Ok(()) => {
                self.set_status("✓ Copied to clipboard", MessageType::Success, STATUS_SUCCESS_DURATION_MS)
            }
            Err(e) => self.set_status(
                format!("✗ Clipboard error: {}", e),
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            ),
        }
    }
}
