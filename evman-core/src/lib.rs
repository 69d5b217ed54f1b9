//! Core types for the evman ecosystem.
//!
//! This crate provides what evman-server and evman-cli share:
//! - `Event` and related types for bookkept events
//! - the file-backed document store
//! - server configuration loading

pub mod error;
pub mod event;
pub mod server_config;
pub mod store;

// Re-export the event types and store handle at crate root for convenience
pub use event::*;
pub use store::EventStore;
