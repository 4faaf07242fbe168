use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entity_link::EntityLink;

/// A reply within a thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub from: String,
    pub message: String,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_timestamp")]
    pub post_ts: DateTime<Utc>,
}

/// A discussion anchored to an entity element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_thread_id")]
    pub id: String,
    pub about: String,
    pub created_by: String,
    pub message: String,
    #[serde(deserialize_with = "crate::parsers::deserializers::deserialize_timestamp")]
    pub thread_ts: DateTime<Utc>,
    #[serde(default)]
    pub posts_count: usize,
    #[serde(default)]
    pub posts: Vec<Post>,
}

impl Thread {
    pub fn entity_link(&self) -> Option<EntityLink> {
        EntityLink::parse(&self.about)
    }

    /// The last `limit` replies, oldest first
    pub fn latest_posts(&self, limit: usize) -> &[Post] {
        let start = self.posts.len().saturating_sub(limit);
        &self.posts[start..]
    }
}
