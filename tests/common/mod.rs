//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for a data directory holding catalog export files
pub struct DataDirBuilder {
    temp_dir: TempDir,
}

impl DataDirBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Write raw content under `name`
    pub fn with_raw(self, name: &str, content: &str) -> Self {
        fs::write(self.file(name), content).expect("Failed to write fixture");
        self
    }

    /// history.json in the endpoint's shape: revisions as JSON-encoded strings
    pub fn with_history(self, entity_type: &str, revisions: &[RevisionBuilder]) -> Self {
        let versions: Vec<Value> =
            revisions.iter().map(|r| Value::String(r.to_json().to_string())).collect();
        let body = json!({ "entityType": entity_type, "versions": versions });
        self.with_raw("history.json", &body.to_string())
    }

    /// feed.json as a paged `data` envelope
    pub fn with_feed(self, threads: &[ThreadBuilder]) -> Self {
        let data: Vec<Value> = threads.iter().map(|t| t.to_json()).collect();
        let body = json!({ "data": data, "paging": { "total": data.len() } });
        self.with_raw("feed.json", &body.to_string())
    }

    pub fn with_services(self, services: &[Value]) -> Self {
        self.with_raw("services.json", &Value::Array(services.to_vec()).to_string())
    }

    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

/// Builder for one revision record
pub struct RevisionBuilder {
    version: String,
    previous: Option<String>,
    updated_by: String,
    updated_at: String,
    added: Vec<String>,
    updated: Vec<String>,
}

impl RevisionBuilder {
    pub fn new(version: &str) -> Self {
        Self {
            version: version.to_string(),
            previous: None,
            updated_by: "admin".to_string(),
            updated_at: "2024-03-01T10:00:00Z".to_string(),
            added: Vec::new(),
            updated: Vec::new(),
        }
    }

    pub fn previous(mut self, version: &str) -> Self {
        self.previous = Some(version.to_string());
        self
    }

    pub fn updated_by(mut self, user: &str) -> Self {
        self.updated_by = user.to_string();
        self
    }

    pub fn updated_at(mut self, rfc3339: &str) -> Self {
        self.updated_at = rfc3339.to_string();
        self
    }

    pub fn added(mut self, field: &str) -> Self {
        self.added.push(field.to_string());
        self
    }

    pub fn updated(mut self, field: &str) -> Self {
        self.updated.push(field.to_string());
        self
    }

    pub fn to_json(&self) -> Value {
        let mut record = json!({
            "version": self.version,
            "updatedBy": self.updated_by,
            "updatedAt": self.updated_at,
            "name": "orders",
        });
        if let Some(previous) = &self.previous {
            let names = |fields: &[String]| -> Vec<Value> {
                fields.iter().map(|f| json!({ "name": f })).collect()
            };
            record["changeDescription"] = json!({
                "previousVersion": previous,
                "fieldsAdded": names(&self.added),
                "fieldsUpdated": names(&self.updated),
                "fieldsDeleted": [],
            });
        }
        record
    }
}

/// Builder for one feed thread
pub struct ThreadBuilder {
    id: String,
    about: String,
    created_by: String,
    message: String,
    thread_ts: String,
    replies: Vec<(String, String)>,
}

impl ThreadBuilder {
    pub fn new(n: u32, thread_ts: &str) -> Self {
        Self {
            id: format!("550e8400-e29b-41d4-a716-{:012}", n),
            about: "<#E::table::sample.db.orders>".to_string(),
            created_by: "alice".to_string(),
            message: format!("thread {}", n),
            thread_ts: thread_ts.to_string(),
            replies: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn about(mut self, about: &str) -> Self {
        self.about = about.to_string();
        self
    }

    pub fn message(mut self, message: &str) -> Self {
        self.message = message.to_string();
        self
    }

    pub fn reply(mut self, from: &str, message: &str) -> Self {
        self.replies.push((from.to_string(), message.to_string()));
        self
    }

    pub fn replies(mut self, count: usize) -> Self {
        for n in 1..=count {
            self = self.reply("bob", &format!("reply {}", n));
        }
        self
    }

    pub fn to_json(&self) -> Value {
        let posts: Vec<Value> = self
            .replies
            .iter()
            .map(|(from, message)| json!({ "from": from, "message": message, "postTs": self.thread_ts }))
            .collect();
        json!({
            "id": self.id,
            "about": self.about,
            "createdBy": self.created_by,
            "message": self.message,
            "threadTs": self.thread_ts,
            "postsCount": posts.len(),
            "posts": posts,
        })
    }
}
