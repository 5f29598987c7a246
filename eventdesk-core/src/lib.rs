//! Core types for the eventdesk ecosystem.
//!
//! This crate provides everything the CLI needs to talk to its collaborators:
//! - `event` for the event document model
//! - `store` for the document store (get/set with merge semantics)
//! - `auth` for the identity provider client and the persisted session

pub mod auth;
pub mod config;
pub mod error;
pub mod event;
pub mod store;

// Re-export the document types at crate root for convenience
pub use event::*;
