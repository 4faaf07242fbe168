use std::rc::Rc;

use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use super::grouping::{DisplayGroup, partition_by_relative_day};
use super::listener::{KeyListenerRegistry, KeySubscription};
use super::relative_day::annotate_relative_days;
use crate::models::{Post, Thread};

/// Threads with more replies than this show a "View all" link instead of inline replies
pub const INLINE_REPLY_LIMIT: usize = 3;

pub const ONBOARDING_MESSAGE: &str =
    "No activity yet. Start a conversation on any data asset and it will show up here.";

/// Callback for replies written in the feed
pub trait FeedOwner {
    fn post_feed(&mut self, message: &str, thread_id: &str);
}

/// How a thread's replies are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyDisplay<'a> {
    /// No replies; only the composer
    ComposerOnly,
    /// Reply count plus the latest replies
    Inline { count: usize, replies: &'a [Post] },
    /// Too many replies to show inline
    ViewAll { count: usize },
}

impl ReplyDisplay<'_> {
    pub fn count_label(count: usize) -> String {
        if count == 1 { "1 reply".to_string() } else { format!("{} replies", count) }
    }

    pub fn view_all_label(count: usize) -> String {
        format!("View all ({}) replies", count)
    }
}

pub fn reply_display(thread: &Thread) -> ReplyDisplay<'_> {
    match thread.posts_count {
        0 => ReplyDisplay::ComposerOnly,
        count if count > INLINE_REPLY_LIMIT => ReplyDisplay::ViewAll { count },
        count => {
            ReplyDisplay::Inline { count, replies: thread.latest_posts(INLINE_REPLY_LIMIT) }
        }
    }
}

/// One thread as rendered in the list
#[derive(Debug, Clone, PartialEq)]
pub struct ThreadCard<'a> {
    pub thread: &'a Thread,
    /// Readable form of the thread's entity link, or the raw `about` when it doesn't parse
    pub about_label: String,
    /// Reply region (latest replies and composer) expanded inline
    pub expanded: bool,
    pub replies: ReplyDisplay<'a>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeedGroupView<'a> {
    pub relative_day: String,
    pub cards: Vec<ThreadCard<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FeedView<'a> {
    Onboarding,
    Groups(Vec<FeedGroupView<'a>>),
}

/// Activity feed selection state
///
/// Holds which thread is expanded inline, which thread the side panel shows and whether
/// the panel is open. The feed itself always comes from the owner.
#[derive(Debug)]
pub struct ActivityFeedList {
    selected_thread: Option<Thread>,
    selected_thread_id: Option<String>,
    is_panel_open: bool,
    enable_side_panel: bool,
    escape: Option<KeySubscription>,
}

impl ActivityFeedList {
    pub fn new(enable_side_panel: bool) -> Self {
        Self {
            selected_thread: None,
            selected_thread_id: None,
            is_panel_open: false,
            enable_side_panel,
            escape: None,
        }
    }

    /// Attach the Escape listener; mounting twice keeps the single existing subscription
    pub fn mount(&mut self, registry: &Rc<KeyListenerRegistry>) {
        if self.escape.is_none() {
            self.escape = Some(registry.subscribe(KeyCode::Esc));
        }
    }

    /// Detach the Escape listener and drop all selection state
    pub fn unmount(&mut self) {
        self.escape = None;
        self.selected_thread = None;
        self.selected_thread_id = None;
        self.is_panel_open = false;
    }

    pub fn is_mounted(&self) -> bool {
        self.escape.is_some()
    }

    pub fn selected_thread(&self) -> Option<&Thread> {
        self.selected_thread.as_ref()
    }

    pub fn selected_thread_id(&self) -> Option<&str> {
        self.selected_thread_id.as_deref()
    }

    pub fn is_panel_open(&self) -> bool {
        self.is_panel_open
    }

    pub fn side_panel_enabled(&self) -> bool {
        self.enable_side_panel
    }

    /// Expand a thread's reply region inline; only one thread is expanded at a time
    pub fn select_thread_for_inline_view(&mut self, id: &str) {
        self.selected_thread_id = Some(id.to_string());
    }

    pub fn deselect_thread(&mut self) {
        self.selected_thread_id = None;
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.selected_thread_id.as_deref() == Some(id)
    }

    /// Look the thread up by id and remember it for the panel
    ///
    /// An id that isn't in `feed` leaves the previous selection untouched.
    pub fn select_thread_for_panel(&mut self, id: &str, feed: &[Thread]) {
        match feed.iter().find(|thread| thread.id == id) {
            Some(thread) => self.selected_thread = Some(thread.clone()),
            None => debug!(thread_id = id, "thread not in feed, keeping previous selection"),
        }
    }

    pub fn promote_to_panel(&mut self) {
        self.is_panel_open = true;
    }

    pub fn close_panel(&mut self) {
        self.selected_thread = None;
        self.is_panel_open = false;
    }

    /// The "View all (N) replies" action: select the thread and open the panel
    pub fn view_all_replies(&mut self, id: &str, feed: &[Thread]) {
        self.select_thread_for_panel(id, feed);
        self.promote_to_panel();
    }

    /// Re-resolve the panel thread after the owner supplied a new feed list
    pub fn feed_list_changed(&mut self, feed: &[Thread]) {
        if let Some(id) = self.selected_thread_id.clone() {
            self.select_thread_for_panel(&id, feed);
        }
    }

    /// Handle a key press; returns whether it was consumed
    ///
    /// Escape closes an open panel while the list is mounted. With the panel closed it
    /// does nothing.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        let subscribed = self.escape.as_ref().is_some_and(|sub| sub.matches(event));
        if subscribed && self.is_panel_open {
            self.close_panel();
            return true;
        }
        false
    }

    /// Thread shown in the side panel, if the panel should render at all
    pub fn panel_thread(&self) -> Option<&Thread> {
        if self.enable_side_panel && self.is_panel_open { self.selected_thread.as_ref() } else { None }
    }

    /// Hand a reply to the owner; blank messages are not sent
    pub fn post_reply(&self, message: &str, thread_id: &str, owner: &mut impl FeedOwner) -> bool {
        let message = message.trim();
        if message.is_empty() {
            return false;
        }
        owner.post_feed(message, thread_id);
        true
    }

    /// Build the grouped list for rendering
    pub fn view<'a>(&self, feed: &'a [Thread], now: &DateTime<Utc>) -> FeedView<'a> {
        if feed.is_empty() {
            return FeedView::Onboarding;
        }

        let annotated = annotate_relative_days(feed, now);
        let groups = partition_by_relative_day(&annotated)
            .into_iter()
            .map(|DisplayGroup { relative_day, threads }| FeedGroupView {
                relative_day,
                cards: threads.into_iter().map(|thread| self.card(thread)).collect(),
            })
            .collect();

        FeedView::Groups(groups)
    }

    fn card<'a>(&self, thread: &'a Thread) -> ThreadCard<'a> {
        ThreadCard {
            thread,
            about_label: thread
                .entity_link()
                .map(|link| link.to_string())
                .unwrap_or_else(|| thread.about.clone()),
            expanded: self.is_expanded(&thread.id),
            replies: reply_display(thread),
        }
    }
}
