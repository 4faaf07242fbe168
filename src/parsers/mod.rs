//! JSON loaders for catalog API exports
//!
//! # Error Handling Strategy
//!
//! Loading follows a **graceful degradation** approach:
//!
//! - **Item failures**: An entry that fails to decode (a malformed revision string, a thread
//!   with a non-UUID id, a service with an unknown `serviceType`) is logged and skipped.
//!
//! - **Catastrophic failure detection**: If more than half of the entries fail, the loader
//!   returns [`LoadError::TooManyInvalid`] instead of a mostly-empty result.
//!
//! - **Typed errors**: Loaders return [`LoadError`]; the CLI wraps them with `anyhow` context.
//!
//! Decoded data handed to the view components is always structured and never fails again.

pub mod deserializers;
pub mod error;
pub mod feed;
pub mod history;
pub mod services;
pub mod source;

pub use error::LoadError;
pub use feed::load_feed;
pub use history::load_entity_history;
pub use services::load_services;
