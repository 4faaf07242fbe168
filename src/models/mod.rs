//! Data models for catalog entity activity.
//!
//! This module defines the structures the viewer reads from the catalog's API exports:
//!
//! - [`RevisionRecord`] - One snapshot of an entity from its version history
//! - [`Thread`] / [`Post`] - Activity feed discussions and their replies
//! - [`EntityLink`] - Parsed `<#E::...>` reference naming what a thread is about
//! - [`ServiceConnection`] - Service records tagged by `serviceType`
//!
//! The backend owns all of these. The viewer only holds them for a render or selection cycle.

pub mod entity_link;
pub mod revision;
pub mod service;
pub mod thread;

pub use entity_link::EntityLink;
pub use revision::{ChangeDescription, EntityHistory, FieldChange, RevisionRecord};
pub use service::{
    DashboardService, DatabaseService, MessagingService, PipelineService, ServiceCategory,
    ServiceConnection, display_secret,
};
pub use thread::{Post, Thread};
