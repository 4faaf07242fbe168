//! Activity feed list.
//!
//! [`ActivityFeedList`] groups owner-supplied threads by relative day and tracks which
//! thread is expanded inline and which is promoted to the side panel. The day labels come
//! from [`relative_day`]; the list itself only partitions by label.

pub mod grouping;
pub mod listener;
pub mod relative_day;
pub mod state;

pub use grouping::{DisplayGroup, partition_by_relative_day};
pub use listener::{KeyListenerRegistry, KeySubscription};
pub use relative_day::{RelativeDayFeed, annotate_relative_days, relative_day_label};
pub use state::{
    ActivityFeedList, FeedGroupView, FeedOwner, FeedView, INLINE_REPLY_LIMIT, ONBOARDING_MESSAGE,
    ReplyDisplay, ThreadCard, reply_display,
};
